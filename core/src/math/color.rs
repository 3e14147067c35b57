//! Colors and color spaces.

use core::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
    ops::{Add, Index, Mul},
    str::FromStr,
};

use super::{ApproxEq, Lerp};

//
// Types
//

/// A generic color type, similar to [`Vector`][super::vec::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
///   Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The (S)RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGB color with `f32` components.
///
/// Channels are nominally in [0, 1] but may exceed that range during
/// shading, for example when a highlight is added on top of a blended
/// color. They are clamped only when converted to [`Color3`].
pub type Color3f<Space = Rgb> = Color<[f32; 3], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}

/// Returns a new RGB color with all three components equal to `v`.
pub const fn gray(v: f32) -> Color3f {
    rgb(v, v, v)
}

/// Error returned when parsing a color from a string fails.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A `#` color without three or six hex digits.
    Syntax,
    /// A character that is not a hexadecimal digit.
    InvalidDigit,
    /// A color name that is not recognized.
    UnknownName,
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
    /// Returns `self` with each channel mapped to [0, 1].
    #[inline]
    pub fn to_color3f(self) -> Color3f {
        Color(self.0.map(|c| c as f32 / 255.0), PhantomData)
    }
}

impl Color3f {
    /// Returns a `Color3` with the components of `self` mapped to `u8`
    /// with `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        Color(self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8), PhantomData)
    }

    /// Parses a color given as `#rgb`, `#rrggbb`, or by name.
    ///
    /// The recognized names are those of the CSS colors `black`, `white`,
    /// `red`, `gray` (or `grey`), and `indigo`. Matching is case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use stipple_core::math::color::{Color3f, rgb};
    ///
    /// assert_eq!(Color3f::parse("#fff"), Ok(rgb(1.0, 1.0, 1.0)));
    /// assert_eq!(Color3f::parse("indigo").map(|c| c.to_color3()), Ok(rgb(0x4B, 0, 0x82)));
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let bytes = match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex)?,
            None => named(s).ok_or(ParseError::UnknownName)?,
        };
        Ok(Color3::from(bytes).to_color3f())
    }
}

fn parse_hex(hex: &str) -> Result<[u8; 3], ParseError> {
    let digit = |c: u8| match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseError::InvalidDigit),
    };
    match hex.as_bytes() {
        &[r, g, b] => Ok([digit(r)? * 17, digit(g)? * 17, digit(b)? * 17]),
        &[r1, r0, g1, g0, b1, b0] => Ok([
            digit(r1)? << 4 | digit(r0)?,
            digit(g1)? << 4 | digit(g0)?,
            digit(b1)? << 4 | digit(b0)?,
        ]),
        _ => Err(ParseError::Syntax),
    }
}

fn named(name: &str) -> Option<[u8; 3]> {
    const NAMES: [(&str, [u8; 3]); 6] = [
        ("black", [0x00, 0x00, 0x00]),
        ("white", [0xFF, 0xFF, 0xFF]),
        ("red", [0xFF, 0x00, 0x00]),
        ("gray", [0x80, 0x80, 0x80]),
        ("grey", [0x80, 0x80, 0x80]),
        ("indigo", [0x4B, 0x00, 0x82]),
    ];
    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

impl<R, Sc> Color<R, Rgb>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
}

//
// Trait impls
//

impl<Sp, const N: usize> Lerp for Color<[f32; N], Sp> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color(self.0.lerp(&other.0, t), PhantomData)
    }
}

impl<Sp, const N: usize> ApproxEq for Color<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl<Sp, const N: usize> Add for Color<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Color(core::array::from_fn(|i| self.0[i] + rhs.0[i]), PhantomData)
    }
}

impl<Sp, const N: usize> Mul<f32> for Color<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Color(self.0.map(|c| c * rhs), PhantomData)
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}

impl FromStr for Color3f {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Color<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "expected #rgb or #rrggbb",
            Self::InvalidDigit => "invalid hex digit",
            Self::UnknownName => "unknown color name",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        assert_eq!(rgb(0xFF, 0, 0).r(), 0xFF);
        assert_eq!(rgb(0, 0xFF, 0).g(), 0xFF);
        assert_eq!(rgb(0, 0, 0xFF).b(), 0xFF);
    }

    #[test]
    fn rgb_to_u32() {
        assert_eq!(rgb(0x11u8, 0x22, 0x33).to_rgb_u32(), 0x00_11_22_33);
    }

    #[test]
    fn to_color3_clamps() {
        assert_eq!(rgb(2.4, -0.5, 0.5).to_color3(), rgb(0xFF, 0x00, 0x7F));
    }

    #[test]
    fn parse_short_hex() {
        let c: Color3f = "#235".parse().unwrap();
        assert_eq!(c.to_color3(), rgb(0x22, 0x33, 0x55));
    }

    #[test]
    fn parse_long_hex_and_names() {
        assert_eq!(Color3f::parse("#88CCdd").unwrap().to_color3(), rgb(0x88, 0xCC, 0xDD));
        assert_eq!(Color3f::parse(" White ").unwrap(), gray(1.0));
        assert_eq!(Color3f::parse("black").unwrap(), gray(0.0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Color3f::parse("#12"), Err(ParseError::Syntax));
        assert_eq!(Color3f::parse("#12345g"), Err(ParseError::InvalidDigit));
        assert_eq!(Color3f::parse("chartreuse"), Err(ParseError::UnknownName));
    }

    #[test]
    fn add_and_scale() {
        assert_eq!(gray(0.25) + rgb(0.5, 0.0, 0.25) * 2.0, rgb(1.25, 0.25, 0.75));
    }
}
