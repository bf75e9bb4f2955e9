//! Compose two poses and recover the second from the composition.
//!
//! Run with: `cargo run --example se2_poses`

use disha_pose::Pose2D;
use disha_pose::config::PoseConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = PoseConfig::load_default()?;
    let display = &config.display;

    let p1 = Pose2D::from_degrees(1.0, 2.0, 90.0)?;
    let p2 = Pose2D::from_degrees(3.0, 0.0, 0.0)?;

    let p3 = p1.compose(p2);
    let p4 = p3.ominus(p1);

    println!("p1             : {}", display.format(&p1));
    println!("p2             : {}", display.format(&p2));
    println!("p1(+)p2        : {}", display.format(&p3));
    println!("(p1(+)p2)(-)p1 : {}", display.format(&p4));

    if !p4.approx_eq(p2, config.tolerance()) {
        log::warn!("(p1(+)p2)(-)p1 differs from p2 beyond tolerance");
    }
    Ok(())
}
