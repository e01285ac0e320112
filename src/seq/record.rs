// A FastA record as read from the input: the identifier (first word of the header line), whatever
// followed it on that line, and the residues with line breaks removed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: String,
}
