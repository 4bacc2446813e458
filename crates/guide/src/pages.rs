//! Page content. Each page is a markdown blob compiled into the binary.

use std::sync::OnceLock;

use crate::markdown::{parse_document, Document};
use crate::routes::PageId;

const REACT_ARCHITECTURE: &str = include_str!("../content/react-architecture.md");
const JAVASCRIPT_SYNTAX_GUIDE: &str = include_str!("../content/javascript-syntax-guide.md");

impl PageId {
    /// Markdown source of the page.
    pub fn source(self) -> &'static str {
        match self {
            PageId::ReactArchitecture => REACT_ARCHITECTURE,
            PageId::JavascriptSyntaxGuide => JAVASCRIPT_SYNTAX_GUIDE,
        }
    }

    /// Parsed page, built on first use.
    pub fn document(self) -> &'static Document {
        static REACT: OnceLock<Document> = OnceLock::new();
        static SYNTAX: OnceLock<Document> = OnceLock::new();
        let cell = match self {
            PageId::ReactArchitecture => &REACT,
            PageId::JavascriptSyntaxGuide => &SYNTAX,
        };
        cell.get_or_init(|| {
            log::debug!("parsing page {self:?}");
            parse_document(self.source())
        })
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::ReactArchitecture => "React Architecture",
            PageId::JavascriptSyntaxGuide => "Javascript Syntax Guide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::Block;

    #[test]
    fn test_titles_match_documents() {
        for page in PageId::ALL {
            assert_eq!(page.document().title(), Some(page.title()));
        }
    }

    #[test]
    fn test_pages_have_code_blocks() {
        for page in PageId::ALL {
            let doc = page.document();
            assert!(doc.code_blocks().count() > 3, "{page:?}");
            for code in doc.code_blocks() {
                assert_eq!(code.language.as_deref(), Some("javascript"));
                assert!(page.source().contains(&code.source));
                let joined: String = code.lines.iter().map(|l| l.text()).collect();
                assert_eq!(joined, code.source);
            }
        }
    }

    #[test]
    fn test_react_architecture_snippets_are_verbatim() {
        let expected = [
            include_str!("../testdata/react-architecture/01.js"),
            include_str!("../testdata/react-architecture/02.js"),
            include_str!("../testdata/react-architecture/03.js"),
            include_str!("../testdata/react-architecture/04.js"),
            include_str!("../testdata/react-architecture/05.js"),
            include_str!("../testdata/react-architecture/06.js"),
            include_str!("../testdata/react-architecture/07.js"),
            include_str!("../testdata/react-architecture/08.js"),
            include_str!("../testdata/react-architecture/09.js"),
            include_str!("../testdata/react-architecture/10.js"),
        ];
        let actual: Vec<_> = PageId::ReactArchitecture
            .document()
            .code_blocks()
            .map(|code| code.source.as_str())
            .collect();
        assert_eq!(actual.len(), expected.len());
        for (idx, (actual, expected)) in actual.iter().zip(expected).enumerate() {
            assert_eq!(*actual, expected, "code block {}", idx + 1);
        }
    }

    #[test]
    fn test_react_architecture_outline() {
        let headings: Vec<_> = PageId::ReactArchitecture
            .document()
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level: 2, text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headings, ["Behavior", "State", "View"]);
    }

    #[test]
    fn test_document_is_cached() {
        let first = PageId::JavascriptSyntaxGuide.document() as *const Document;
        let second = PageId::JavascriptSyntaxGuide.document() as *const Document;
        assert_eq!(first, second);
    }
}
