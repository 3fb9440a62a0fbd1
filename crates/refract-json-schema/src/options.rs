/// The single option the schema pass consumes (§6.4). `Default` is `false`
/// because most schema consumers do not want source maps embedded in the
/// output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    pub emit_source_map: bool,
}
