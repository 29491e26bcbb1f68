/// A single visitor check-in.
///
/// Serialized as `visitor;time`. Neither field is escaped, so a visitor
/// name containing `;` shifts the field boundary when read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub visitor_name: String,
    pub time_of_visit: String,
}

impl Record {
    pub fn new(visitor_name: impl Into<String>, time_of_visit: impl Into<String>) -> Self {
        Self {
            visitor_name: visitor_name.into(),
            time_of_visit: time_of_visit.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.visitor_name, self.time_of_visit)
    }
}
