extern crate hermite_path;

use hermite_path::{BoundaryCondition, CubicSpline, SplineOptions};

fn main() {

    let points = [[0.0, 1.0], [4.0, 5.0], [8.0, 4.0], [6.0, 1.0], [10.0, 5.0]];
    let options = SplineOptions::default()
        .with_boundary_condition(BoundaryCondition::EqualThirdDerivative);

    let spline = CubicSpline::new(points, options).unwrap();

    for t in [0.0, 0.5, 1.0] {
        println!("At t = {:.1}: {:?}", t, spline.evaluate(t).unwrap().as_slice());
    }

    let scalar = CubicSpline::natural(vec![0.0, 1.0, 3.0]).unwrap();
    println!("{:?}", scalar.interpolate(0.0).unwrap());
}
