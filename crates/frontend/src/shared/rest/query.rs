/// Построитель пути запроса к таблице в синтаксисе PostgREST.
///
/// Имена колонок и операторы передаются как есть, значения фильтров
/// экранируются.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    params: Vec<(String, String)>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    /// `select=col1,col2` или `select=*`
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.params.push(("order".into(), format!("{}.asc", column)));
        self
    }

    pub fn not_null(mut self, column: &str) -> Self {
        self.params.push((column.into(), "not.is.null".into()));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params
            .push((column.into(), format!("eq.{}", urlencoding::encode(value))));
        self
    }

    /// Путь относительно `/rest/v1/`
    pub fn to_path(&self) -> String {
        if self.params.is_empty() {
            return self.table.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.table, query)
    }
}
