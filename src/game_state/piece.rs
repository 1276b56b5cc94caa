//! Packed one-byte square contents.
//!
//! The low nibble stores the piece kind, the high nibble stores state flags:
//! color, "has moved", "en-passant target" and "promoted". Every square of the
//! board holds one of these, with `Piece::NONE` for an empty square.

use crate::game_state::chess_types::{Color, PieceKind};

const KIND_MASK: u8 = 0x0F;
const DARK_FLAG: u8 = 0x10;
const MOVED_FLAG: u8 = 0x20;
const EN_PASSANT_FLAG: u8 = 0x40;
const PROMOTED_FLAG: u8 = 0x80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const NONE: Piece = Piece(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        let color_bits = match color {
            Color::Light => 0,
            Color::Dark => DARK_FLAG,
        };
        Piece(kind.code() | color_bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 & KIND_MASK == 0
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & KIND_MASK)
    }

    /// Color bit of the encoding. Meaningless for an empty square.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & DARK_FLAG != 0 {
            Color::Dark
        } else {
            Color::Light
        }
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.0 & MOVED_FLAG != 0
    }

    #[inline]
    pub const fn is_en_passant_target(self) -> bool {
        self.0 & EN_PASSANT_FLAG != 0
    }

    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.0 & PROMOTED_FLAG != 0
    }

    #[inline]
    pub const fn with_moved(self) -> Self {
        Piece(self.0 | MOVED_FLAG)
    }

    #[inline]
    pub const fn without_moved(self) -> Self {
        Piece(self.0 & !MOVED_FLAG)
    }

    #[inline]
    pub const fn with_en_passant(self) -> Self {
        Piece(self.0 | EN_PASSANT_FLAG)
    }

    #[inline]
    pub const fn without_en_passant(self) -> Self {
        Piece(self.0 & !EN_PASSANT_FLAG)
    }

    #[inline]
    pub const fn with_promoted(self) -> Self {
        Piece(self.0 | PROMOTED_FLAG)
    }

    #[inline]
    pub fn is_kind(self, kind: PieceKind) -> bool {
        self.kind() == Some(kind)
    }

    /// True for an occupied square holding a piece of `color`.
    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        !self.is_empty() && self.color() == color
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn fen_char(self) -> Option<char> {
        let lower = match self.kind()? {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        Some(match self.color() {
            Color::Light => lower.to_ascii_uppercase(),
            Color::Dark => lower,
        })
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Piece::new(color, kind))
    }

    /// Single-character board glyph; `.` for an empty square.
    pub fn ascii(self) -> char {
        self.fen_char().unwrap_or('.')
    }
}
