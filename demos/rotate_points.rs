//! Walks a square around a screw motion in 3D PGA and prints each corner,
//! interpolating the motion in eight steps.
//!
//! Run with `cargo run --example rotate_points`.

use ga_kernel::algebras::{pga3, vga2};
use ga_kernel::convert::Pointlike;
use ga_kernel::{Result, Rotor};

fn main() -> Result<()> {
    let corners = [
        vga2::vector(1.0, 1.0),
        vga2::vector(-1.0, 1.0),
        vga2::vector(-1.0, -1.0),
        vga2::vector(1.0, -1.0),
    ];
    let corners = corners.iter().map(|c| c.to_point3()).collect::<Result<Vec<_>>>()?;

    // a quarter turn about the z axis while rising by 2
    let target = pga3::rotation(&pga3::e12(), std::f64::consts::FRAC_PI_2)?.then(&pga3::translator(0.0, 0.0, 2.0));
    println!("motor: {target:.4}");
    println!("log:   {:.4}", target.log()?);

    for step in 0..=8 {
        let t = step as f64 / 8.0;
        let motion = Rotor::identity().interpolate(&target, t)?;
        let moved: Vec<String> = motion
            .apply_all(&corners)
            .iter()
            .filter_map(pga3::point_coords)
            .map(|[x, y, z]| format!("({x:+.3}, {y:+.3}, {z:+.3})"))
            .collect();
        println!("t = {t:.3}: {}", moved.join(" "));
    }
    Ok(())
}
