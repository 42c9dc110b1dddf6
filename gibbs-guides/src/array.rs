//! Nice tick values at 1, 2 or 5 times a power of ten.

/// Returns roughly `count` evenly spaced, nicely rounded values inside `[start, stop]`
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if count.is_nan() || count <= 0.0 {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if i2 < i1 || i1.is_nan() || i2.is_nan() {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    let value = |i: usize| -> f64 {
        let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
        // Negative increments encode 1 / step, which keeps fractional ticks exact
        if inc < 0.0 {
            k / -inc
        } else {
            k * inc
        }
    };

    (0..n).map(value).collect()
}

/// Integer tick bounds `(i1, i2)` and increment for the ascending interval `[start, stop]`
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, inc)
    }
}
