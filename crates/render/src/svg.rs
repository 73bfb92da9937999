//! SVG output, one standalone document per card.

use crate::draw::{CircleShape, DrawList, ImageDraw};
use crate::error::RenderError;
use crate::traits::CardRenderer;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, Clone, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl CardRenderer for SvgRenderer {
    fn file_extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, card: &DrawList, out: &mut dyn Write) -> Result<(), RenderError> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let (width, height) = (card.canvas.width, card.canvas.height);
        let width_mm = format!("{width}mm");
        let height_mm = format!("{height}mm");
        let view_box = format!("0 0 {width} {height}");
        let root = BytesStart::new("svg").with_attributes([
            ("xmlns", SVG_NS),
            ("xmlns:xlink", XLINK_NS),
            ("version", "1.1"),
            ("baseProfile", "full"),
            ("width", width_mm.as_str()),
            ("height", height_mm.as_str()),
            ("viewBox", view_box.as_str()),
        ]);
        writer.write_event(Event::Start(root))?;

        writer.write_event(Event::Empty(circle_element(&card.circle)))?;
        for image in &card.images {
            writer.write_event(Event::Empty(image_element(image)))?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }
}

fn circle_element(circle: &CircleShape) -> BytesStart<'static> {
    let cx = circle.center.x.to_string();
    let cy = circle.center.y.to_string();
    let r = circle.radius.to_string();
    let stroke_width = circle.stroke_width.to_string();
    BytesStart::new("circle").with_attributes([
        ("cx", cx.as_str()),
        ("cy", cy.as_str()),
        ("r", r.as_str()),
        ("fill", circle.fill),
        ("stroke", circle.stroke),
        ("stroke-width", stroke_width.as_str()),
    ])
}

/// The image sits at its unrotated rectangle and is turned about its center.
fn image_element(image: &ImageDraw) -> BytesStart<'static> {
    let x = image.rect.x.to_string();
    let y = image.rect.y.to_string();
    let width = image.rect.width.to_string();
    let height = image.rect.height.to_string();
    let transform = format!(
        "rotate({} {} {})",
        image.rotation, image.pivot.x, image.pivot.y
    );
    BytesStart::new("image").with_attributes([
        ("x", x.as_str()),
        ("y", y.as_str()),
        ("width", width.as_str()),
        ("height", height.as_str()),
        ("transform", transform.as_str()),
        ("xlink:href", image.href.as_str()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{CircleShape, ImageDraw};
    use dobble_types::{CardIndex, Point, Rect, Size, SymbolId};

    fn card(href: &str) -> DrawList {
        DrawList {
            index: CardIndex::new(0),
            canvas: Size::new(100, 100),
            circle: CircleShape {
                center: Point::new(50.0, 50.0),
                radius: 49.0,
                fill: "white",
                stroke: "black",
                stroke_width: 1.0,
            },
            images: vec![ImageDraw {
                symbol: SymbolId::new(1),
                href: href.to_string(),
                rect: Rect::new(30, 40, 21, 12),
                rotation: 275,
                pivot: Point::new(40.5, 46.0),
            }],
        }
    }

    fn render(list: &DrawList) -> String {
        let mut out = Vec::new();
        SvgRenderer::new().render(list, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_document_frame() {
        let svg = render(&card("../img/1.png"));
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="100mm" height="100mm" viewBox="0 0 100 100""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_circle_outline() {
        let svg = render(&card("../img/1.png"));
        assert!(svg.contains(
            r#"<circle cx="50" cy="50" r="49" fill="white" stroke="black" stroke-width="1"/>"#
        ));
    }

    #[test]
    fn test_image_element() {
        let svg = render(&card("../img/1.png"));
        assert!(svg.contains(
            r#"<image x="30" y="40" width="21" height="12" transform="rotate(275 40.5 46)" xlink:href="../img/1.png"/>"#
        ));
    }

    #[test]
    fn test_href_is_escaped() {
        let svg = render(&card(r#"img/a&b "q".png"#));
        assert!(svg.contains(r#"xlink:href="img/a&amp;b &quot;q&quot;.png""#));
    }

    #[test]
    fn test_images_follow_circle() {
        let svg = render(&card("1.png"));
        let circle = svg.find("<circle").unwrap();
        let image = svg.find("<image").unwrap();
        assert!(circle < image);
    }

    #[test]
    fn test_file_name() {
        let renderer = SvgRenderer::new();
        assert_eq!(renderer.file_name(CardIndex::new(12)), "12.svg");
    }

    #[test]
    fn test_markup_in_href_cannot_open_elements() {
        let svg = render(&card("<x>'.png"));
        assert!(svg.contains(r#"xlink:href="&lt;x&gt;&apos;.png""#));
        assert_eq!(svg.matches('<').count(), 5);
    }

    #[test]
    fn test_children_are_indented() {
        let svg = render(&card("1.png"));
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="utf-8"?>"#);
        assert!(lines[1].starts_with("<svg "));
        assert!(lines[2].starts_with("  <circle "));
        assert!(lines[3].starts_with("  <image "));
        assert_eq!(lines[4], "</svg>");
    }
}
