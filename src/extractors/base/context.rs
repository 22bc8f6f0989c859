// Extraction context and the extractor capability.

use crate::extractors::base::types::SimplifiedNode;
use crate::raw::RawNode;
use crate::vars::GlobalVariableTable;

/// Shared state threaded through the walk and handed to every extractor.
///
/// `depth` and `parent` describe where the current node sits in the raw
/// tree; `vars` is the run's variable table, which extractors populate when
/// they intern structural values.
pub struct ExtractorContext<'a> {
    pub depth: usize,
    pub parent: Option<&'a RawNode>,
    pub vars: &'a mut GlobalVariableTable,
}

/// One rule of the extraction pipeline.
///
/// An extractor reads the raw node (and whatever context it needs) and
/// writes zero or more fields onto the in-progress simplified result. It
/// never removes fields written by earlier extractors, so pipeline order
/// only decides which fields get populated.
pub trait NodeExtractor {
    /// Short name used in debug logging.
    fn name(&self) -> &'static str;

    fn apply(&self, node: &RawNode, result: &mut SimplifiedNode, ctx: &mut ExtractorContext<'_>);
}
