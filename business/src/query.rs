//! Query string for the paginated list endpoint.
//!
//! The backend speaks the `json-server` dialect:
//! `_page`, `_limit`, `q` (full-text), `_sort` and `_order`.

/// Columns the table shows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    Mode,
    Name,
    Origin,
    Status,
    Total,
    Type,
    UserId,
}

impl SortColumn {
    pub const ALL: [Self; 8] = [
        Self::Id,
        Self::Mode,
        Self::Name,
        Self::Origin,
        Self::Status,
        Self::Total,
        Self::Type,
        Self::UserId,
    ];

    /// Field name understood by `_sort`.
    pub fn field(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Mode => "mode",
            Self::Name => "name",
            Self::Origin => "origin",
            Self::Status => "status",
            Self::Total => "total",
            Self::Type => "type",
            Self::UserId => "userId",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Mode => "Mode",
            Self::Name => "Name",
            Self::Origin => "Origin",
            Self::Status => "Status",
            Self::Total => "Total",
            Self::Type => "Type",
            Self::UserId => "User ID",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(column: SortColumn) -> Self {
        Self {
            column,
            order: SortOrder::Asc,
        }
    }

    /// Sort after clicking `column`'s header while `current` is active:
    /// the same column flips direction, another column starts ascending.
    pub fn toggled(current: Option<Self>, column: SortColumn) -> Self {
        match current {
            Some(sort) if sort.column == column => Self {
                column,
                order: sort.order.reversed(),
            },
            _ => Self::asc(column),
        }
    }
}

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub q: String,
    pub sort: Option<Sort>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 5,
            q: String::new(),
            sort: None,
        }
    }
}

impl ListQuery {
    /// Query string without the leading `?`.
    ///
    /// `q` is always present, even when empty.
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "_page={}&_limit={}&q={}",
            self.page.max(1),
            self.limit.max(1),
            urlencoding::encode(&self.q)
        );
        if let Some(sort) = self.sort {
            query.push_str(&format!(
                "&_sort={}&_order={}",
                sort.column.field(),
                sort.order.as_str()
            ));
        }
        query
    }

    /// Path (relative to the API base) for listing `resource`.
    pub fn path(&self, resource: &str) -> String {
        format!("{resource}?{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_string() {
        assert_eq!(
            ListQuery::default().to_query_string(),
            "_page=1&_limit=5&q="
        );
    }

    #[test]
    fn search_term_is_encoded() {
        let query = ListQuery {
            q: "Shanghai Port & co".to_owned(),
            ..ListQuery::default()
        };

        assert_eq!(
            query.path("shipments"),
            "shipments?_page=1&_limit=5&q=Shanghai%20Port%20%26%20co"
        );
    }

    #[test]
    fn sort_is_appended() {
        let query = ListQuery {
            page: 3,
            limit: 10,
            q: String::new(),
            sort: Some(Sort {
                column: SortColumn::UserId,
                order: SortOrder::Desc,
            }),
        };

        assert_eq!(
            query.to_query_string(),
            "_page=3&_limit=10&q=&_sort=userId&_order=desc"
        );
    }

    #[test]
    fn zero_page_and_limit_are_clamped() {
        let query = ListQuery {
            page: 0,
            limit: 0,
            ..ListQuery::default()
        };

        assert_eq!(query.to_query_string(), "_page=1&_limit=1&q=");
    }

    #[test]
    fn toggling_sort() {
        let first = Sort::toggled(None, SortColumn::Name);
        assert_eq!(first, Sort::asc(SortColumn::Name));

        let second = Sort::toggled(Some(first), SortColumn::Name);
        assert_eq!(second.order, SortOrder::Desc);

        let third = Sort::toggled(Some(second), SortColumn::Total);
        assert_eq!(third, Sort::asc(SortColumn::Total));
    }
}
