/// Rotation (degrees about x, about y) for a pointer at `(x, y)` inside a
/// `width` x `height` box. Centre is flat, edges reach `max_deg`.
pub fn tilt(x: f64, y: f64, width: f64, height: f64, max_deg: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = ((x / width) * 2.0 - 1.0).clamp(-1.0, 1.0);
    let ny = ((y / height) * 2.0 - 1.0).clamp(-1.0, 1.0);
    // pointer low tips the top away; pointer right turns it right
    (-ny * max_deg, nx * max_deg)
}

pub fn tilt_style(rx: f64, ry: f64) -> String {
    format!(
        "transform: perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg); transition: transform 0.2s ease-out;",
        rx, ry
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt(50.0, 50.0, 100.0, 100.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_the_limit() {
        assert_eq!(tilt(100.0, 0.0, 100.0, 100.0, 10.0), (10.0, 10.0));
        assert_eq!(tilt(0.0, 100.0, 100.0, 100.0, 10.0), (-10.0, -10.0));
        assert_eq!(tilt(250.0, 50.0, 100.0, 100.0, 10.0), (0.0, 10.0));
    }

    #[test]
    fn empty_box_does_not_divide_by_zero() {
        assert_eq!(tilt(5.0, 5.0, 0.0, 100.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn style_is_rounded() {
        assert_eq!(
            tilt_style(1.234, -5.0),
            "transform: perspective(800px) rotateX(1.23deg) rotateY(-5.00deg); transition: transform 0.2s ease-out;"
        );
    }
}
