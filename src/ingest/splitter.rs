//! Recursive character splitter with fixed overlap.
//!
//! Split points are chosen by preference: paragraph break, then sentence
//! boundary, then the raw character ceiling. The ceiling is a hard bound
//! regardless of boundary quality. Every chunk after the first begins
//! exactly `overlap` characters before its predecessor's end, so a
//! document is reconstructible from its chunks (see tests).

use crate::config::ChunkConfig;

/// Split `text` into overlapping chunks of at most `cfg.max_chars`
/// characters. Whitespace-only input produces no chunks.
///
/// Requires `cfg.overlap < cfg.max_chars`; `Config::from_env` enforces it.
pub fn split_text(text: &str, cfg: &ChunkConfig) -> Vec<String> {
    debug_assert!(cfg.overlap < cfg.max_chars);

    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();

    if n <= cfg.max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;

    loop {
        let hard_end = (start + cfg.max_chars).min(n);
        if hard_end == n {
            chunks.push(chars[start..n].iter().collect());
            break;
        }

        // The split point must land past the overlap region, otherwise the
        // next chunk would not advance.
        let min_end = start + cfg.overlap + 1;
        let end = find_split_point(&chars, min_end, hard_end);

        chunks.push(chars[start..end].iter().collect());
        start = end - cfg.overlap;
    }

    chunks
}

/// Pick the best split point in `(min_end..=hard_end)`, scanning backwards:
/// paragraph break first, then sentence end, then the hard ceiling.
fn find_split_point(chars: &[char], min_end: usize, hard_end: usize) -> usize {
    for end in (min_end..=hard_end).rev() {
        if end >= 2 && chars[end - 1] == '\n' && chars[end - 2] == '\n' {
            return end;
        }
    }

    for end in (min_end..=hard_end).rev() {
        if chars[end - 1] == '\n' {
            return end;
        }
        if end >= 2 && chars[end - 1] == ' ' && matches!(chars[end - 2], '.' | '!' | '?') {
            return end;
        }
    }

    hard_end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(max_chars: usize, overlap: usize) -> ChunkConfig {
        ChunkConfig { max_chars, overlap }
    }

    /// Undo the overlap: chunk 0 plus every later chunk minus its leading
    /// `overlap` characters.
    fn reassemble(chunks: &[String], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(chunk);
            } else {
                out.extend(chunk.chars().skip(overlap));
            }
        }
        out
    }

    #[test]
    fn test_empty_and_whitespace_produce_nothing() {
        assert!(split_text("", &cfg(100, 10)).is_empty());
        assert!(split_text("  \n\n  ", &cfg(100, 10)).is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = split_text("hola mundo", &cfg(100, 10));
        assert_eq!(chunks, vec!["hola mundo".to_string()]);
    }

    #[test]
    fn test_chunk_length_bound() {
        let text = "palabra ".repeat(400);
        let c = cfg(1000, 100);
        for chunk in split_text(&text, &c) {
            assert!(chunk.chars().count() <= c.max_chars);
        }
    }

    #[test]
    fn test_reconstruction_plain_text() {
        let text = "El manual de la impresora indica que debe reiniciarse. \
                    Luego debe comprobarse el cable de red. "
            .repeat(30);
        let c = cfg(200, 25);
        let chunks = split_text(&text, &c);
        assert!(chunks.len() > 1);
        assert_eq!(reassemble(&chunks, c.overlap), text);
    }

    #[test]
    fn test_reconstruction_with_paragraphs() {
        let paragraph = "Una política interna de vacaciones.\nCada empleado dispone de días.";
        let text = (0..12)
            .map(|i| format!("{paragraph} Sección {i}."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let c = cfg(150, 20);
        let chunks = split_text(&text, &c);
        assert_eq!(reassemble(&chunks, c.overlap), text);
    }

    #[test]
    fn test_reconstruction_multibyte() {
        let text = "año señal café 🛠 configuración ".repeat(60);
        let c = cfg(90, 15);
        let chunks = split_text(&text, &c);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= c.max_chars);
        }
        assert_eq!(reassemble(&chunks, c.overlap), text);
    }

    #[test]
    fn test_prefers_paragraph_boundary() {
        let first = "a".repeat(40);
        let second = "b".repeat(200);
        let text = format!("{first}\n\n{second}");
        let chunks = split_text(&text, &cfg(100, 10));
        // The first split lands on the paragraph break, not mid-word.
        assert!(chunks[0].ends_with("\n\n"), "got {:?}", chunks[0]);
    }

    #[test]
    fn test_prefers_sentence_boundary() {
        let text = format!("Primera frase corta. {}", "x".repeat(300));
        let chunks = split_text(&text, &cfg(100, 10));
        assert!(chunks[0].ends_with(". "), "got {:?}", chunks[0]);
    }

    #[test]
    fn test_hard_ceiling_without_boundaries() {
        let text = "z".repeat(250);
        let c = cfg(100, 10);
        let chunks = split_text(&text, &c);
        assert!(chunks.iter().all(|ch| ch.chars().count() <= 100));
        assert_eq!(reassemble(&chunks, c.overlap), text);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let text = "q".repeat(250);
        let c = cfg(100, 10);
        let chunks = split_text(&text, &c);
        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].chars().collect();
            let tail: String = prev[prev.len() - c.overlap..].iter().collect();
            let head: String = pair[1].chars().take(c.overlap).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_zero_overlap() {
        let text = "m".repeat(95);
        let c = cfg(10, 0);
        let chunks = split_text(&text, &c);
        assert_eq!(reassemble(&chunks, 0), text);
        assert_eq!(chunks.concat(), text);
    }
}
