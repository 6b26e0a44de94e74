//! Text conversion: `Show` formats, `Read` parses.

use core::fmt;
use core::str::FromStr;

use super::NewType;
use crate::clause::Derives;
use crate::derivables as tag;

impl<B, Tag, D> fmt::Display for NewType<B, Tag, D>
where
    B: fmt::Display,
    D: Derives<tag::Show>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<B, Tag, D> FromStr for NewType<B, Tag, D>
where
    B: FromStr,
    D: Derives<tag::Read>,
{
    type Err = B::Err;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B::from_str(s).map(Self::new)
    }
}

#[cfg(feature = "std")]
mod stream {
    use std::io::{self, BufRead};
    use std::str::FromStr;

    use super::NewType;
    use crate::clause::Derives;
    use crate::derivables as tag;
    use crate::error::ReadError;

    impl<B, Tag, D> NewType<B, Tag, D>
    where
        B: FromStr,
        D: Derives<tag::Read>,
    {
        /// Extracts the next whitespace-delimited token from `reader` and
        /// parses it into the stored value.
        ///
        /// The whole token must parse: `"42abc"` is one token and fails
        /// with [`ReadError::Parse`] rather than yielding `42`. The token is
        /// consumed either way, so the next read starts after it.
        ///
        /// On failure the stored value is left untouched. The whitespace
        /// that ends the token stays in the reader.
        pub fn read_from<R>(&mut self, reader: &mut R) -> Result<(), ReadError<B::Err>>
        where
            R: BufRead + ?Sized,
        {
            let token = next_token(reader)?.ok_or(ReadError::Exhausted)?;
            log::trace!("extracted token {token:?}");
            match token.parse::<B>() {
                Ok(value) => {
                    self.value = value;
                    Ok(())
                }
                Err(err) => {
                    log::debug!(
                        "token {token:?} is not a valid {}",
                        core::any::type_name::<B>()
                    );
                    Err(ReadError::Parse(err))
                }
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    pub(crate) fn next_token<R>(reader: &mut R) -> io::Result<Option<String>>
    where
        R: BufRead + ?Sized,
    {
        let mut token = Vec::new();
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        String::from_utf8(token)
            .map(Some)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

}
