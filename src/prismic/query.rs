use std::fmt;

/// A search predicate. Only `at` is needed by the blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    At { path: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub page_size: Option<u32>,
    pub page: Option<u32>,
    pub orderings: Vec<SortOrder>,
    pub fetch: Vec<String>,
}

impl Predicate {
    pub fn at(path: impl Into<String>, value: impl Into<String>) -> Predicate {
        Predicate::At {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Value of the `q` parameter for a set of predicates.
    pub fn to_query(predicates: &[Predicate]) -> String {
        let inner: String = predicates.iter().map(|p| p.to_string()).collect();
        format!("[{inner}]")
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::At { path, value } => {
                let value = value.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "[at({path}, \"{value}\")]")
            }
        }
    }
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> SortOrder {
        SortOrder {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> SortOrder {
        SortOrder {
            field: field.into(),
            descending: true,
        }
    }

    /// Value of the `orderings` parameter.
    pub fn to_query(orderings: &[SortOrder]) -> String {
        let fields: Vec<String> = orderings.iter().map(|o| o.to_string()).collect();
        format!("[{}]", fields.join(","))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "{} desc", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

impl QueryOptions {
    pub fn new() -> QueryOptions {
        QueryOptions::default()
    }

    pub fn page_size(mut self, page_size: u32) -> QueryOptions {
        self.page_size = Some(page_size);
        self
    }

    pub fn order_by(mut self, ordering: SortOrder) -> QueryOptions {
        self.orderings.push(ordering);
        self
    }

    pub fn fetch(mut self, field: impl Into<String>) -> QueryOptions {
        self.fetch.push(field.into());
        self
    }

    /// Search parameters other than `ref`, `q` and the access token.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if !self.orderings.is_empty() {
            params.push(("orderings", SortOrder::to_query(&self.orderings)));
        }
        if !self.fetch.is_empty() {
            params.push(("fetch", self.fetch.join(",")));
        }
        params
    }
}
