use crate::types::ContentBlock;

// Counted in characters rather than words; see DESIGN.md.
const CHARACTERS_PER_MINUTE: usize = 200;

/// Characters in every heading and body fragment of the post.
fn count_characters(content: &[ContentBlock]) -> usize {
    content
        .iter()
        .map(|block| {
            let body: usize = block.body.iter().map(|fragment| fragment.text.chars().count()).sum();
            block.heading.chars().count() + body
        })
        .sum()
}

/// Estimated reading time in whole minutes, rounded up.
pub fn calculate_reading_time(content: &[ContentBlock]) -> usize {
    let character_count = count_characters(content);

    (character_count + CHARACTERS_PER_MINUTE - 1) / CHARACTERS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_reads_in_zero_minutes() {
        assert_eq!(calculate_reading_time(&[]), 0);
    }

    #[test]
    fn empty_block_contributes_nothing() {
        let content = vec![ContentBlock::new("", &[""])];
        assert_eq!(count_characters(&content), 0);
        assert_eq!(calculate_reading_time(&content), 0);
    }

    #[test]
    fn heading_and_body_are_both_counted() {
        let content = vec![ContentBlock::new("Intro", &["Hello"])];
        assert_eq!(count_characters(&content), 10);
        assert_eq!(calculate_reading_time(&content), 1);
    }

    #[test]
    fn rounds_up_at_the_boundary() {
        let exact = vec![ContentBlock::new("", &["a".repeat(200).as_str()])];
        let over = vec![ContentBlock::new("", &["a".repeat(201).as_str()])];
        assert_eq!(calculate_reading_time(&exact), 1);
        assert_eq!(calculate_reading_time(&over), 2);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let content = vec![ContentBlock::new("Ação", &["çã"])];
        assert_eq!(count_characters(&content), 6);
    }

    #[test]
    fn never_decreases_as_blocks_are_appended() {
        let mut content = Vec::new();
        let mut previous = calculate_reading_time(&content);
        for i in 0..50 {
            content.push(ContentBlock::new(&format!("Section {i}"), &["Lorem ipsum dolor sit amet, consectetur."]));
            let current = calculate_reading_time(&content);
            assert!(current >= previous);
            previous = current;
        }
        assert!(previous > 1);
    }

    #[test]
    fn is_deterministic() {
        let content = vec![
            ContentBlock::new("One", &["first", "second"]),
            ContentBlock::new("Two", &[]),
        ];
        assert_eq!(calculate_reading_time(&content), calculate_reading_time(&content.clone()));
    }
}
