use crate::error::TranslateError;

/// The eight VM memory segments, as a closed enumeration dispatched by
/// `match` rather than by re-parsing the segment name at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Constant,
    Local,
    Argument,
    This,
    That,
    Temp,
    Pointer,
    Static,
}

impl Segment {
    pub fn parse(name: &str, line: usize) -> Result<Self, TranslateError> {
        match name {
            "constant" => Ok(Segment::Constant),
            "local" => Ok(Segment::Local),
            "argument" => Ok(Segment::Argument),
            "this" => Ok(Segment::This),
            "that" => Ok(Segment::That),
            "temp" => Ok(Segment::Temp),
            "pointer" => Ok(Segment::Pointer),
            "static" => Ok(Segment::Static),
            _ => Err(TranslateError::UnknownSegment {
                line,
                segment: name.to_string(),
            }),
        }
    }

    /// The base-address symbol for the four pointer-indirect segments.
    pub fn base_symbol(self) -> Option<&'static str> {
        match self {
            Segment::Local => Some("LCL"),
            Segment::Argument => Some("ARG"),
            Segment::This => Some("THIS"),
            Segment::That => Some("THAT"),
            _ => None,
        }
    }
}
