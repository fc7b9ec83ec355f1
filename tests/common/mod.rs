use flappy_gates::entities::{Rect, Rgb};
use flappy_gates::error::GameError;
use flappy_gates::render::Surface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Rect(Rect, Rgb),
    Text(String, f64, f64),
    Present,
}

/// Surface that remembers what was drawn; can be told to fail on present.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    pub fail_present: bool,
}

#[allow(dead_code)]
impl Recorder {
    pub fn rects(&self) -> Vec<(Rect, Rgb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(r, c) => Some((*r, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(Op::Rect(rect, color));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, _color: Rgb) {
        self.ops.push(Op::Text(text.to_string(), x, y));
    }

    fn present(&mut self) -> Result<(), GameError> {
        if self.fail_present {
            return Err(GameError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "surface gone",
            )));
        }
        self.ops.push(Op::Present);
        Ok(())
    }
}
