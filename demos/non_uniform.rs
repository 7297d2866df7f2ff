extern crate hermite_path;

use hermite_path::{CubicSpline, SplineOptions};

fn main() {

    let points = [[0.0, 0.0], [1.0, 10.0], [3.0, 30.0]];
    let options = SplineOptions::default().with_spacing(vec![1.0, 2.0]);

    let spline = CubicSpline::new(points, options).unwrap();

    println!("Non-uniform:");
    for t in [0.0, 0.5, 1.0] {
        println!("At t = {:.1}: {:?}", t, spline.evaluate(t).unwrap().as_slice());
    }
}
