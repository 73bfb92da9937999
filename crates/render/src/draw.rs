//! Backend-neutral drawing instructions for one card.

use crate::error::RenderError;
use dobble_layout::{CardGeometry, CardLayout};
use dobble_types::{CardIndex, Point, Rect, Size, SymbolId};

/// The card outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub radius: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// One symbol image, placed at its pre-rotation rectangle and turned about its center.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraw {
    pub symbol: SymbolId,
    pub href: String,
    pub rect: Rect,
    pub rotation: u16,
    pub pivot: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub index: CardIndex,
    /// Canvas size in drawing units; renderers map one unit to one millimetre.
    pub canvas: Size,
    pub circle: CircleShape,
    /// Drawn in order, on top of the circle.
    pub images: Vec<ImageDraw>,
}

impl DrawList {
    /// Builds the draw list for a packed card.
    ///
    /// `href` maps each symbol to the reference its image is drawn from.
    pub fn from_layout<F>(
        layout: &CardLayout,
        geometry: &CardGeometry,
        mut href: F,
    ) -> Result<Self, RenderError>
    where
        F: FnMut(SymbolId) -> Result<String, RenderError>,
    {
        let circle = geometry.circle();
        let images = layout
            .placements
            .iter()
            .map(|placement| {
                Ok(ImageDraw {
                    symbol: placement.symbol,
                    href: href(placement.symbol)?,
                    rect: placement.rect,
                    rotation: placement.rotation,
                    pivot: placement.pivot(),
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(Self {
            index: layout.index,
            canvas: geometry.canvas(),
            circle: CircleShape {
                center: circle.center,
                radius: circle.radius,
                fill: "white",
                stroke: "black",
                stroke_width: 1.0,
            },
            images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dobble_layout::Placement;

    fn layout() -> CardLayout {
        CardLayout {
            index: CardIndex::new(3),
            placements: vec![
                Placement {
                    symbol: SymbolId::new(1),
                    rect: Rect::new(40, 30, 10, 20),
                    rotation: 90,
                    draws: 2,
                },
                Placement {
                    symbol: SymbolId::new(8),
                    rect: Rect::new(20, 55, 15, 9),
                    rotation: 0,
                    draws: 1,
                },
            ],
            attempts: 1,
        }
    }

    #[test]
    fn test_from_layout_keeps_placement_order() {
        let list = DrawList::from_layout(&layout(), &CardGeometry::square(100), |symbol| {
            Ok(format!("../img/{symbol}.png"))
        })
        .unwrap();

        assert_eq!(list.index, CardIndex::new(3));
        assert_eq!(list.canvas, Size::new(100, 100));
        assert_eq!(list.circle.radius, 49.0);
        assert_eq!(list.images.len(), 2);
        assert_eq!(list.images[0].href, "../img/1.png");
        assert_eq!(list.images[0].pivot, Point::new(45.0, 40.0));
        assert_eq!(list.images[1].symbol, SymbolId::new(8));
        assert_eq!(list.images[1].pivot, Point::new(27.5, 59.5));
    }

    #[test]
    fn test_href_failure_propagates() {
        let result = DrawList::from_layout(&layout(), &CardGeometry::square(100), |_| {
            Err(RenderError::from("no such image"))
        });
        assert!(matches!(result, Err(RenderError::Other(_))));
    }
}
