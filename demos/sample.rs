extern crate hermite_path;

use hermite_path::{BoundaryCondition, CubicSpline, SplineOptions};

fn main() {

    let points = [[0.0, 1.0], [4.0, 5.0], [8.0, 4.0], [6.0, 1.0], [10.0, 5.0]];
    let options = SplineOptions::default()
        .with_boundary_condition(BoundaryCondition::EqualThirdDerivative);

    let spline = CubicSpline::new(points, options).unwrap();
    let sample = spline.sample(100).unwrap();

    println!("t;x;y");
    for (t, point) in sample.t.iter().zip(sample.points.iter()) {
        println!("{:.3};{:.3};{:.3}", t, point[0], point[1]);
    }
}
