use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position
// macro = several moves the solver treats as a single edge

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())
        } else {
            write!(f, "{}", self.dir)
        }
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub(crate) fn extend(&mut self, moves: &Moves) {
        self.0.extend_from_slice(&moves.0);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroKind {
    Tunnel,
    GoalRoom,
}

/// A forced sequence collapsed into one search edge.
///
/// Keeps the exact primitive moves (including the walk to the box)
/// so it can always be expanded back.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MacroMove {
    pub kind: MacroKind,
    pub moves: Moves,
}

impl MacroMove {
    pub(crate) fn new(kind: MacroKind, moves: Moves) -> Self {
        MacroMove { kind, moves }
    }

    /// Direction of the first push.
    pub fn dir(&self) -> Dir {
        self.moves
            .iter()
            .find(|m| m.is_push)
            .map(|m| m.dir)
            .expect("Macro without a push")
    }

    pub fn push_cnt(&self) -> usize {
        self.moves.push_cnt()
    }
}

impl Display for MacroMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.moves)
    }
}

impl Debug for MacroMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MacroKind::Tunnel => "tunnel",
            MacroKind::GoalRoom => "goal room",
        };
        write!(
            f,
            "{} {}x{} {}",
            kind,
            self.dir().to_string().to_uppercase(),
            self.push_cnt(),
            self
        )
    }
}

/// One edge of a solution path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Move(Move),
    Macro(MacroMove),
}

impl Label {
    pub fn move_cnt(&self) -> usize {
        match self {
            Label::Move(_) => 1,
            Label::Macro(m) => m.moves.move_cnt(),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Label::Move(m) => write!(f, "{}", m),
            Label::Macro(m) => write!(f, "{}", m),
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Solution {
    labels: Vec<Label>,
}

impl Solution {
    pub(crate) fn new(labels: Vec<Label>) -> Self {
        Solution { labels }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn has_macros(&self) -> bool {
        self.labels.iter().any(|l| match l {
            Label::Macro(_) => true,
            Label::Move(_) => false,
        })
    }

    /// Every label expanded into primitive moves.
    pub fn moves(&self) -> Moves {
        let mut moves = Moves::default();
        for label in &self.labels {
            match label {
                Label::Move(m) => moves.add(*m),
                Label::Macro(m) => moves.extend(&m.moves),
            }
        }
        moves
    }

    pub(crate) fn expand_macros(&self) -> Solution {
        Solution::new(self.moves().into_iter().map(Label::Move).collect())
    }

    pub fn move_cnt(&self) -> usize {
        self.labels.iter().map(Label::move_cnt).sum()
    }

    pub fn push_cnt(&self) -> usize {
        self.moves().push_cnt()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
