//! Pseudo-random character reveal ("text scramble").
//!
//! Each character gets its own window of frames: before it the old
//! character shows, inside it a flickering glyph, after it the new character.

use rand::prelude::*;

pub const SCRAMBLE_GLYPHS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#',
    '_', '_', '_', '_', '_', '_', '_',
];

/// Chance per frame that a glyph in flight is swapped for another one.
pub const GLYPH_SWAP_PROBABILITY: f32 = 0.28;

/// Frames over which both the start and the length of each window are drawn.
pub const DEFAULT_FRAME_BUDGET: u32 = 40;

#[derive(Clone, Debug)]
struct Entry {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
    glyph: Option<char>,
}

/// Output of one [`TextScramble::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    /// `true` at each char position currently showing a scramble glyph.
    pub glyph_mask: Vec<bool>,
    pub settled_chars: usize,
    pub done: bool,
}

pub struct TextScramble {
    rng: StdRng,
    queue: Vec<Entry>,
    frame: u32,
}

impl TextScramble {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            queue: Vec::new(),
            frame: 0,
        }
    }

    /// Queue a transition from `from` to `to`, spread over roughly
    /// `2 * frame_budget` frames.
    pub fn set_text(&mut self, from: &str, to: &str, frame_budget: u32) {
        let budget = frame_budget.max(1);
        let old: Vec<char> = from.chars().collect();
        let new: Vec<char> = to.chars().collect();
        let len = old.len().max(new.len());
        self.queue.clear();
        self.frame = 0;
        for i in 0..len {
            let start = self.rng.gen_range(0..budget);
            let end = start.saturating_add(self.rng.gen_range(0..budget));
            self.queue.push(Entry {
                from: old.get(i).copied(),
                to: new.get(i).copied(),
                start,
                end,
                glyph: None,
            });
        }
    }

    pub fn is_done(&self) -> bool {
        self.queue.iter().all(|e| self.frame >= e.end)
    }

    /// Render the current frame and advance by one.
    pub fn step(&mut self) -> ScrambleFrame {
        let mut out = ScrambleFrame {
            text: String::with_capacity(self.queue.len()),
            glyph_mask: Vec::with_capacity(self.queue.len()),
            ..Default::default()
        };
        for entry in self.queue.iter_mut() {
            if self.frame >= entry.end {
                out.settled_chars += 1;
                if let Some(c) = entry.to {
                    out.text.push(c);
                    out.glyph_mask.push(false);
                }
            } else if self.frame >= entry.start {
                let swap = entry.glyph.is_none() || self.rng.gen::<f32>() < GLYPH_SWAP_PROBABILITY;
                if swap {
                    entry.glyph = SCRAMBLE_GLYPHS.choose(&mut self.rng).copied();
                }
                if let Some(g) = entry.glyph {
                    out.text.push(g);
                    out.glyph_mask.push(true);
                }
            } else if let Some(c) = entry.from {
                out.text.push(c);
                out.glyph_mask.push(false);
            }
        }
        out.done = out.settled_chars == self.queue.len();
        self.frame += 1;
        out
    }

    /// Final text of the queued transition.
    pub fn target(&self) -> String {
        self.queue.iter().filter_map(|e| e.to).collect()
    }
}
