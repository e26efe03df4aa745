use crate::types::AlignedBlock;

pub fn format_block(block: &AlignedBlock) -> String {
    format!("{}\n{}\n{}\n", block.index, block.timestamp, block.text)
}

/// Renders blocks separated by one blank line. Each block ends with a
/// newline; the output has no trailing blank line.
pub fn render_blocks(blocks: &[AlignedBlock]) -> String {
    blocks
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n")
}
