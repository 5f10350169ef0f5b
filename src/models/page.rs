use serde::{Deserialize, Serialize};

// Envelope de paginación del backend (Spring Data)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page_no: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    /// Envuelve una lista completa (endpoints sin paginar) como página única
    pub fn single(content: Vec<T>) -> Self {
        let count = content.len();
        Self {
            content,
            page_no: 0,
            page_size: count as u32,
            total_elements: count as u64,
            total_pages: 1,
            last: true,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            page_no: 0,
            page_size: 0,
            total_elements: 0,
            total_pages: 0,
            last: true,
        }
    }
}

// Algunos endpoints devuelven lista plana y otros el envelope, según versión
// del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum Listing<T> {
    Plain(Vec<T>),
    Paged(Page<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) => items,
            Listing::Paged(page) => page.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    // Sin Default a propósito: el envelope no puede exigírselo al contenido
    #[derive(Deserialize, Debug, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_page_deserializes_content_without_default() {
        let json = r#"{"content":[{"id":1},{"id":2}],"pageNo":0,"last":true}"#;
        let page: Page<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![Row { id: 1 }, Row { id: 2 }]);
        assert!(page.last);
        // Los campos escalares ausentes sí caen a sus defaults
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_listing_accepts_plain_and_paged_shapes() {
        let plain: Listing<Row> = serde_json::from_str(r#"[{"id":5}]"#).unwrap();
        assert_eq!(plain.into_vec(), vec![Row { id: 5 }]);

        let paged: Listing<Row> =
            serde_json::from_str(r#"{"content":[{"id":9}],"last":true}"#).unwrap();
        assert_eq!(paged.into_vec(), vec![Row { id: 9 }]);
    }
}
