use chrono::NaiveDate;

use crate::models::promotion::Promotion;

/// Columns spanned by the empty-table placeholder cell.
pub const PLACEHOLDER_COLSPAN: usize = 7;

pub const PLACEHOLDER_TEXT: &str = "No promotions to display";
pub const NO_IMAGE_TEXT: &str = "No image";

/// The table body, mirrored 1:1 from the last render. Holds either data rows
/// keyed by promotion id or the single all-column placeholder row.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Placeholder,
    Rows(Vec<Row>),
}

/// One rendered table row. `id` and `name` double as the data the row's
/// delete control carries, so DeleteFlow needs no second round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub course_name: String,
    pub price: String,
    pub start_date: String,
    pub end_date: String,
    pub image: RowImage,
    pub edit_href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowImage {
    /// Displayable URL derived from the server-relative image path.
    Thumbnail(String),
    /// "No image" placeholder cell.
    None,
}

impl Row {
    fn from_promotion(promotion: &Promotion, static_prefix: &str) -> Self {
        Self {
            id: promotion.id,
            name: promotion.name.clone(),
            description: promotion.description.clone().unwrap_or_default(),
            course_name: promotion.course_name.clone().unwrap_or_default(),
            price: promotion
                .discounted_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            start_date: promotion.start_date.map(format_date).unwrap_or_default(),
            end_date: promotion.end_date.map(format_date).unwrap_or_default(),
            image: match &promotion.image_path {
                Some(path) => RowImage::Thumbnail(image_url(static_prefix, path)),
                None => RowImage::None,
            },
            edit_href: format!("/promotions/{}/edit", promotion.id),
        }
    }

    /// `{id, name}` pair the delete control hands to DeleteFlow.
    pub fn delete_trigger(&self) -> (i64, &str) {
        (self.id, &self.name)
    }
}

/// View-state stand-in for the table's DOM subtree: a row registry keyed by
/// promotion id. Render replaces the whole body; row removal is targeted.
#[derive(Debug)]
pub struct TableState {
    body: TableBody,
    static_prefix: String,
}

impl TableState {
    pub fn new(static_prefix: impl Into<String>) -> Self {
        Self {
            body: TableBody::Rows(Vec::new()),
            static_prefix: static_prefix.into(),
        }
    }

    /// Full replacement of the body, one row per item in input order. An
    /// empty collection renders the single placeholder row instead.
    pub fn render(&mut self, items: &[Promotion]) {
        self.body = if items.is_empty() {
            TableBody::Placeholder
        } else {
            TableBody::Rows(
                items
                    .iter()
                    .map(|p| Row::from_promotion(p, &self.static_prefix))
                    .collect(),
            )
        };
    }

    /// Remove exactly the row keyed by `id`. Removing the last row leaves an
    /// empty body rather than re-showing the placeholder.
    pub fn remove_row(&mut self, id: i64) -> bool {
        match &mut self.body {
            TableBody::Placeholder => false,
            TableBody::Rows(rows) => {
                let before = rows.len();
                rows.retain(|row| row.id != id);
                rows.len() < before
            }
        }
    }

    pub fn body(&self) -> &TableBody {
        &self.body
    }

    pub fn rows(&self) -> &[Row] {
        match &self.body {
            TableBody::Placeholder => &[],
            TableBody::Rows(rows) => rows,
        }
    }

    pub fn row(&self, id: i64) -> Option<&Row> {
        self.rows().iter().find(|row| row.id == id)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder)
    }
}

/// Localized `dd.mm.yyyy` date rendering.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Displayable URL for a server-relative image path: strip the static-root
/// prefix, serve from the site root.
pub fn image_url(static_prefix: &str, path: &str) -> String {
    format!("/{}", path.strip_prefix(static_prefix).unwrap_or(path))
}
