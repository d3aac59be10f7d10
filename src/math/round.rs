
/// Round to a number of decimal digits with the half-to-even tie rule,
/// matching the behavior the percent-error contract was specified
/// against.
pub fn round_to(x: f64, digits: u32) -> f64 {
    let pow1: f64;
    let pow2: f64;

    if digits > 22 {
        // 10^digits alone would overflow to infinity
        pow1 = (10.0 as f64).powi((digits - 22) as i32);
        pow2 = 1e22;
    } else {
        pow1 = (10.0 as f64).powi(digits as i32);
        pow2 = 1.0;
    }

    let y = (x * pow1) * pow2;

    let mut z = y.round();

    // .round() goes half-away-from-zero; redo exact ties half-to-even.
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }

    (z / pow2) / pow1
}
