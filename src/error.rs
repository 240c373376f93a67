use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Errors from the fallible conversions; vector arithmetic itself never fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected {expected} components, found {found}")]
    Length { expected: usize, found: usize },

    #[error("cannot parse vector from {0:?}")]
    Parse(String),
}

// Parses the body of "Name(a, b, ...)" into exactly N components
pub(crate) fn parse_components<const N: usize>(name: &str, s: &str) -> Result<[f64; N]> {
    let parse_err = || Error::Parse(s.to_owned());

    let body = s
        .trim()
        .strip_prefix(name)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(parse_err)?;

    let values = body
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|_| parse_err()))
        .collect::<Result<Vec<_>>>()?;

    values.as_slice().try_into().map_err(|_| Error::Length {
        expected: N,
        found: values.len(),
    })
}
