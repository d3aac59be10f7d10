
use derivlab::approximation::approximator::approximate;
use derivlab::configuration::Configuration;
use derivlab::math::curve::quadratic::Quadratic;
use derivlab::plotting::chartdata::derivative_plot;

fn main() {
    let config = Configuration::new();
    let parabola = Quadratic::test_parabola();
    let x = 1.0;

    println!("{}, evaluated at x = {}", parabola, x);
    println!("h, secant slope, true derivative, percent error");
    for &h in config.step_sizes() {
        let result = approximate(&parabola, x, h).unwrap();
        println!("{}, {}, {}, {}%",
                 h,
                 result.secant_slope(),
                 result.true_derivative(),
                 result.percent_error());
    }

    let h = 0.5;
    let plot = derivative_plot(&parabola, x, h, config.window()).unwrap();
    println!("curve samples: {}, secant line samples: {}",
             plot.curve_points().len(),
             plot.line_points().len());
    println!("{}", plot.to_json().unwrap());
}
