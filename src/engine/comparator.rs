/// A visited node reduced to the data its comparator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// `a.b.c`, one entry per link of the chain.
    MemberChain(Vec<String>),
    Identifier(String),
    /// The operand of `typeof`, dotted if it is a member chain.
    TypeofArgument(String),
}

impl Candidate {
    pub fn comparator(&self) -> Comparator {
        match self {
            Self::MemberChain(_) => Comparator::MemberChain,
            Self::Identifier(_) => Comparator::Identifier,
            Self::TypeofArgument(_) => Comparator::TypeofArgument,
        }
    }

    /// Source-like rendering, for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::MemberChain(segments) => segments.join("."),
            Self::Identifier(name) => name.clone(),
            Self::TypeofArgument(name) => format!("typeof {name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    MemberChain,
    Identifier,
    TypeofArgument,
}

impl Comparator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MemberChain => "member_chain",
            Self::Identifier => "identifier",
            Self::TypeofArgument => "typeof_argument",
        }
    }

    /// Whether `candidate` is the node addressed by the dotted `path`.
    pub fn matches(&self, candidate: &Candidate, path: &str) -> bool {
        match (self, candidate) {
            (Self::MemberChain, Candidate::MemberChain(segments)) => {
                let mut parts = path.split('.');
                segments
                    .iter()
                    .all(|segment| parts.next() == Some(segment.as_str()))
                    && parts.next().is_none()
            }
            (Self::Identifier, Candidate::Identifier(name)) => name == path,
            (Self::TypeofArgument, Candidate::TypeofArgument(name)) => name == path,
            _ => false,
        }
    }
}
