use {
    std::{fs::File, io::{self, Read, Write}, path::Path},
    csv::{ReaderBuilder, Writer},
    crate::error::{PipelineError, Result},
};

/// In-memory CSV table. Cells are `None` when they were empty or matched one
/// of the NA tokens on read, and are written back as empty fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            headers,
            rows,
        }
    }

    pub fn read_csv(path: &Path, na_values: &[String]) -> Result<Self> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => PipelineError::MissingInput(path.to_owned()),
            _ => PipelineError::Io(err),
        })?;

        Self::from_reader(file, na_values)
    }

    pub fn from_reader<R: Read>(reader: R, na_values: &[String]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?
            .iter()
            .enumerate()
            .map(|(i, header)| if i == 0 { header.trim_start_matches('\u{feff}') } else { header })
            .map(|header| header.to_owned())
            .collect();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(PipelineError::MalformedRow {
                    row: record.position().map(|pos| pos.line() as usize).unwrap_or(index + 2),
                    expected: headers.len(),
                    found: record.len(),
                });
            }

            let mut row: Vec<Option<String>> = record.iter()
                .map(|cell| if na_values.iter().any(|na| na == cell) { None } else { Some(cell.to_owned()) })
                .collect();
            row.resize(headers.len(), None);

            rows.push(row);
        }

        Ok(Self::new(headers, rows))
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        self.to_writer(File::create(path)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = Option<&str>>> {
        let index = self.column_index(name)
            .ok_or_else(|| PipelineError::MissingColumn(name.to_owned()))?;

        Ok(self.rows.iter().map(move |row| row[index].as_deref()))
    }

    /// Replaces the column called `name` with `values`, appending it when the
    /// table has no such column. `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<Option<String>>) {
        assert_eq!(values.len(), self.rows.len(), "column length must match the number of rows");

        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            },
            None => {
                self.headers.push(name.to_owned());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }
}
