use crate::record::Record;

pub(crate) const FRUITS_PATH: &str = "resources/fruits-and-vegetables.csv";
pub(crate) const TARGET: &str = "foodType";

/// Read a csv file into records. The `name` column is used as the record id,
/// every other column becomes an attribute. Returns the attribute names in
/// header order alongside the records.
pub(crate) fn read_records(path: &str) -> (Vec<String>, Vec<Record>) {
    let mut reader = csv::Reader::from_path(path).expect("Something went wrong reading the file");
    let headers = reader.headers().unwrap().clone();
    let attributes: Vec<String> = headers
        .iter()
        .filter(|h| *h != "name")
        .map(|h| h.to_string())
        .collect();
    let records = reader
        .records()
        .enumerate()
        .map(|(i, row)| {
            let row = row.unwrap();
            let mut id = format!("row {}", i);
            let mut pairs = Vec::new();
            for (h, v) in headers.iter().zip(row.iter()) {
                if h == "name" {
                    id = v.to_string();
                } else {
                    pairs.push((h.to_string(), v.to_string()));
                }
            }
            Record::from_pairs(id, pairs)
        })
        .collect();
    (attributes, records)
}
