#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect {
        from: BackendCoord,
        to: BackendCoord,
        rgb: (u8, u8, u8),
        alpha: f64,
        filled: bool,
    },
    Path {
        points: Vec<BackendCoord>,
        rgb: (u8, u8, u8),
    },
    Polygon {
        points: Vec<BackendCoord>,
        rgb: (u8, u8, u8),
    },
    Line {
        from: BackendCoord,
        to: BackendCoord,
    },
    Circle {
        center: BackendCoord,
        radius: u32,
    },
    Text {
        text: String,
        at: BackendCoord,
        size: f64,
    },
}

/// Backend that keeps a log of primitives instead of pixels. Text is never
/// rasterised, so no font has to be installed.
pub struct RecordingBackend {
    size: (u32, u32),
    ops: Rc<RefCell<Vec<Op>>>,
}

impl RecordingBackend {
    pub fn new(size: (u32, u32)) -> (Self, Rc<RefCell<Vec<Op>>>) {
        let ops = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                size,
                ops: ops.clone(),
            },
            ops,
        )
    }

    fn push(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

fn rgb(color: BackendColor) -> (u8, u8, u8) {
    color.rgb
}

impl DrawingBackend for RecordingBackend {
    type ErrorType = Infallible;

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        _point: BackendCoord,
        _color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        _style: &S,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        self.push(Op::Line { from, to });
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        let color = style.color();
        self.push(Op::Rect {
            from: upper_left,
            to: bottom_right,
            rgb: rgb(color),
            alpha: color.alpha,
            filled: fill,
        });
        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        self.push(Op::Path {
            points: path.into_iter().collect(),
            rgb: rgb(style.color()),
        });
        Ok(())
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        _style: &S,
        _fill: bool,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        self.push(Op::Circle { center, radius });
        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        self.push(Op::Polygon {
            points: vert.into_iter().collect(),
            rgb: rgb(style.color()),
        });
        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<Infallible>> {
        self.push(Op::Text {
            text: text.to_string(),
            at: pos,
            size: style.size(),
        });
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Infallible>> {
        let size = style.size();
        let width = text.chars().count() as f64 * size * 0.6;
        Ok((width.ceil() as u32, size.ceil() as u32))
    }
}

pub fn texts(ops: &[Op]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub fn filled_rects_with(ops: &[Op], color: (u8, u8, u8)) -> usize {
    ops.iter()
        .filter(|op| matches!(op, Op::Rect { rgb, filled: true, .. } if *rgb == color))
        .count()
}

pub fn polygons(ops: &[Op]) -> Vec<&Op> {
    ops.iter()
        .filter(|op| matches!(op, Op::Polygon { .. }))
        .collect()
}
