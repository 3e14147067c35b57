//! Reading and writing PNM (NetPBM) images.
//!
//! Frames are written as binary PPM, the simplest format most image tools
//! can open: a short text header followed by raw 8-bit RGB triplets.
//!
//! Type  | Magic | Pixel format    | Read | Write
//! ----- | ----- | --------------- | ---- | -----
//! PGM   | P5    | 8 bpp grayscale | yes  | no
//! PPM   | P3    | 3×8 bpp RGB     | yes  | no
//! PPM   | P6    | 3×8 bpp RGB     | yes  | yes

use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::math::{Color3, rgb};
use crate::util::buf::Buf2;

/// Error decoding or writing a PNM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An I/O error occurred.
    #[cfg(feature = "std")]
    Io(io::ErrorKind),
    /// Unsupported magic number.
    Unsupported([u8; 2]),
    /// Unexpected end of input while decoding.
    UnexpectedEnd,
    /// Invalid numeric value encountered.
    InvalidNumber,
}

/// Result of decoding or writing a PNM image.
pub type Result<T> = core::result::Result<T, Error>;

/// The sub-formats understood by [`read_pnm`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Format {
    /// RGB, decimal text.
    TextPixmap,
    /// Grayscale, one byte per pixel.
    BinaryGraymap,
    /// RGB, three bytes per pixel.
    BinaryPixmap,
}

/// The header of a PNM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    format: Format,
    width: usize,
    height: usize,
    max: u16,
}

/// A cursor over the bytes of an encoded image.
struct Reader<'a> {
    bytes: &'a [u8],
}

impl Header {
    fn parse(r: &mut Reader<'_>) -> Result<Self> {
        let magic = [r.byte()?, r.byte()?];
        let format = match &magic {
            b"P3" => Format::TextPixmap,
            b"P5" => Format::BinaryGraymap,
            b"P6" => Format::BinaryPixmap,
            _ => return Err(Error::Unsupported(magic)),
        };
        let width = r.number()?;
        let height = r.number()?;
        let max = r.number()?;
        if max == 0 || max > 255 {
            return Err(Error::InvalidNumber);
        }
        // Exactly one whitespace byte separates a binary header from data
        if format != Format::TextPixmap {
            r.byte()?;
        }
        Ok(Self {
            format,
            width: width as usize,
            height: height as usize,
            max: max as u16,
        })
    }
}

impl<'a> Reader<'a> {
    fn byte(&mut self) -> Result<u8> {
        let (&b, rest) =
            self.bytes.split_first().ok_or(Error::UnexpectedEnd)?;
        self.bytes = rest;
        Ok(b)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.bytes.len() < n {
            return Err(Error::UnexpectedEnd);
        }
        let (head, rest) = self.bytes.split_at(n);
        self.bytes = rest;
        Ok(head)
    }

    /// Skips whitespace and `#` comments, then parses a decimal number.
    fn number(&mut self) -> Result<u32> {
        loop {
            match self.bytes.first() {
                Some(b'#') => {
                    let end = self.bytes.iter().position(|&b| b == b'\n');
                    let end = end.unwrap_or(self.bytes.len());
                    self.bytes = &self.bytes[end..];
                }
                Some(b) if b.is_ascii_whitespace() => {
                    self.bytes = &self.bytes[1..];
                }
                Some(_) => break,
                None => return Err(Error::UnexpectedEnd),
            }
        }
        let len = self
            .bytes
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(self.bytes.len());
        let digits = self.take(len)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidNumber);
        }
        digits.iter().try_fold(0u32, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add((d - b'0') as u32))
                .ok_or(Error::InvalidNumber)
        })
    }
}

/// Decodes a PNM image of format P3, P5, or P6 from `bytes`.
///
/// Channel values are rescaled from the image's maximum value to 255.
///
/// # Errors
/// Returns [`Error::Unsupported`] for other formats, and
/// [`Error::UnexpectedEnd`] or [`Error::InvalidNumber`] for malformed
/// images.
///
/// # Examples
/// ```
/// use stipple_core::math::rgb;
/// use stipple_core::util::pnm::read_pnm;
///
/// let buf = read_pnm(b"P3 2 1 255\n255 0 0  0 0 255\n").unwrap();
/// assert_eq!(&buf[0], &[rgb(0xFF, 0, 0), rgb(0, 0, 0xFF)]);
/// ```
pub fn read_pnm(bytes: &[u8]) -> Result<Buf2<Color3>> {
    let r = &mut Reader { bytes };
    let h = Header::parse(r)?;
    let count = h.width.checked_mul(h.height).ok_or(Error::InvalidNumber)?;
    // Samples above the maximum value are malformed in every format
    let scale = |c: u32| {
        if c > h.max as u32 {
            Err(Error::InvalidNumber)
        } else {
            Ok((c * 255 / h.max as u32) as u8)
        }
    };

    let data: Vec<Color3> = match h.format {
        Format::BinaryPixmap => r
            .take(count.checked_mul(3).ok_or(Error::InvalidNumber)?)?
            .chunks_exact(3)
            .map(|c| -> Result<Color3> {
                let [r, g, b] = [c[0], c[1], c[2]].map(|c| scale(c as u32));
                Ok(rgb(r?, g?, b?))
            })
            .collect::<Result<_>>()?,
        Format::BinaryGraymap => r
            .take(count)?
            .iter()
            .map(|&c| -> Result<Color3> {
                let c = scale(c as u32)?;
                Ok(rgb(c, c, c))
            })
            .collect::<Result<_>>()?,
        Format::TextPixmap => (0..count)
            .map(|_| {
                let mut ch = [0; 3];
                for c in &mut ch {
                    *c = scale(r.number()?)?;
                }
                Ok(ch.into())
            })
            .collect::<Result<_>>()?,
    };
    Ok(Buf2::new(h.width, h.height, data))
}

/// Encodes `buf` as a binary PPM (P6) image.
///
/// # Examples
/// ```
/// use stipple_core::math::rgb;
/// use stipple_core::util::{buf::Buf2, pnm::encode_ppm};
///
/// let buf = Buf2::new(2, 1, [rgb(0xFF, 0, 0), rgb(0, 0, 0xFF)]);
/// assert_eq!(encode_ppm(&buf), b"P6 2 1 255\n\xFF\0\0\0\0\xFF");
/// ```
pub fn encode_ppm(buf: &Buf2<Color3>) -> Vec<u8> {
    let mut out = header(buf);
    out.reserve(3 * buf.data().len());
    for c in buf.data() {
        out.extend_from_slice(&c.0);
    }
    out
}

fn header(buf: &Buf2<Color3>) -> Vec<u8> {
    use alloc::format;
    format!("P6 {} {} 255\n", buf.width(), buf.height()).into_bytes()
}

/// Writes `buf` to `out` as a binary PPM (P6) image.
///
/// # Errors
/// Returns [`Error::Io`] if writing fails.
#[cfg(feature = "std")]
pub fn write_ppm(mut out: impl Write, buf: &Buf2<Color3>) -> Result<()> {
    out.write_all(&header(buf))?;
    for row in buf.rows() {
        for c in row {
            out.write_all(&c.0)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes `buf` to the file at `path` as a binary PPM (P6) image.
///
/// Creates the file, or truncates it if it already exists.
///
/// # Errors
/// Returns [`Error::Io`] if creating or writing the file fails.
#[cfg(feature = "std")]
pub fn save_ppm(path: impl AsRef<Path>, buf: &Buf2<Color3>) -> Result<()> {
    write_ppm(BufWriter::new(File::create(path)?), buf)
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::Io(kind) => write!(f, "pnm i/o error: {kind}"),
            Error::Unsupported([a, b]) => write!(
                f,
                "unsupported pnm format {:?}",
                [*a as char, *b as char]
            ),
            Error::UnexpectedEnd => f.write_str("unexpected end of pnm data"),
            Error::InvalidNumber => f.write_str("invalid number in pnm data"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.kind())
    }
}
