use super::ease::lerp;

/// Everything the page ever animates on a single element. Each frame a
/// driver derives one of these and hands it to the effect boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualStyle {
    pub x: f64,
    pub y: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub skew_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualStyle {
    pub const IDENTITY: VisualStyle = VisualStyle {
        x: 0.0,
        y: 0.0,
        x_percent: 0.0,
        y_percent: 0.0,
        skew_y: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub fn translate_x(x: f64) -> Self {
        Self { x, ..Self::IDENTITY }
    }

    pub fn skewed(skew_y: f64) -> Self {
        Self { skew_y, ..Self::IDENTITY }
    }

    pub fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
            x_percent: lerp(from.x_percent, to.x_percent, t),
            y_percent: lerp(from.y_percent, to.y_percent, t),
            skew_y: lerp(from.skew_y, to.skew_y, t),
            rotate_x: lerp(from.rotate_x, to.rotate_x, t),
            rotate_y: lerp(from.rotate_y, to.rotate_y, t),
            scale: lerp(from.scale, to.scale, t),
            opacity: lerp(from.opacity, to.opacity, t),
        }
    }

    /// CSS `transform` value. Percent translation is emitted first so it is
    /// relative to the element box, then the pixel offset on top of it.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x_percent != 0.0 || self.y_percent != 0.0 {
            parts.push(format!("translate({}%, {}%)", fmt(self.x_percent), fmt(self.y_percent)));
        }
        parts.push(format!("translate3d({}px, {}px, 0)", fmt(self.x), fmt(self.y)));
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", fmt(self.rotate_x)));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", fmt(self.rotate_y)));
        }
        if self.skew_y != 0.0 {
            parts.push(format!("skewY({}deg)", fmt(self.skew_y)));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", fmt(self.scale)));
        }
        parts.join(" ")
    }
}

// Three decimals is below a device pixel and keeps style strings short.
fn fmt(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        assert_eq!(VisualStyle::IDENTITY.transform(), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn test_transform_includes_only_active_parts() {
        let style = VisualStyle {
            x_percent: 10.0,
            skew_y: -3.5,
            opacity: 0.25,
            ..VisualStyle::IDENTITY
        };
        assert_eq!(
            style.transform(),
            "translate(10%, 0%) translate3d(0px, 0px, 0) skewY(-3.5deg)"
        );
    }

    #[test]
    fn test_negative_zero_is_printed_as_zero() {
        let style = VisualStyle::translate_x(-0.0001);
        assert_eq!(style.transform(), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn test_interpolate_halfway() {
        let from = VisualStyle { y: 40.0, opacity: 0.0, ..VisualStyle::IDENTITY };
        let mid = VisualStyle::interpolate(&from, &VisualStyle::IDENTITY, 0.5);
        assert_eq!(mid.y, 20.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.scale, 1.0);
    }
}
