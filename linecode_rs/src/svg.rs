use std::fmt::Write;

use crate::{render::Primitive, segment::Time};

pub fn to_svg(primitives: &[Primitive], width: Time, height: Time) -> String {
    let mut svg = format!(r#"<svg width="{width}" height="{height}">"#);
    for p in primitives {
        let line = &p.line;
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
            line.x1, line.y1, line.x2, line.y2, p.stroke.color, p.stroke.width
        );
        if let Some(dash) = p.stroke.dash {
            let _ = write!(svg, r#" stroke-dasharray="{dash}""#);
        }
        svg += "/>";
    }
    svg += "</svg>";
    svg
}

#[cfg(test)]
mod test {
    use super::to_svg;
    use crate::{level::Level, render::render, segment::Segment};

    #[test]
    fn test_empty() {
        assert_eq!(to_svg(&[], 220, 50), r#"<svg width="220" height="50"></svg>"#);
    }

    #[test]
    fn test_single_segment() {
        let primitives = render(&[Segment::flat(0, 20, Level(10))]);
        assert_eq!(
            to_svg(&primitives, 220, 50),
            concat!(
                r#"<svg width="220" height="50">"#,
                r##"<line x1="0" y1="0" x2="0" y2="50" stroke="#ddd" stroke-width="1" stroke-dasharray="4"/>"##,
                r##"<line x1="20" y1="0" x2="20" y2="50" stroke="#ddd" stroke-width="1" stroke-dasharray="4"/>"##,
                r#"<line x1="0" y1="10" x2="20" y2="10" stroke="black" stroke-width="2"/>"#,
                "</svg>"
            )
        );
    }
}
