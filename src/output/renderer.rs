// Tue Jan 13 2026 - Alex

use crate::structure::{Member, StructureTemplate};

/// Renders a template as a `typedef struct` block with `// loc=` comments
/// aligned in one column.
pub struct TemplateRenderer {
    min_column: usize,
}

impl TemplateRenderer {
    pub fn new(min_column: usize) -> Self {
        Self { min_column }
    }

    /// Column of every `//` in the rendered member lines, counted in chars.
    pub fn comment_column(&self, template: &StructureTemplate) -> usize {
        template
            .members()
            .iter()
            .map(|m| member_prefix(m).chars().count())
            .fold(self.min_column, usize::max)
    }

    pub fn render(&self, template: &StructureTemplate) -> String {
        let column = self.comment_column(template);
        let mut out = String::from("typedef struct{\n");

        for member in template.members() {
            let prefix = member_prefix(member);
            out.push_str(&format!(
                "{:<width$}// loc={}{}\n",
                prefix,
                member.location(),
                member.trailing_text(),
                width = column
            ));
        }

        let size = template.declared_size();
        if size.is_known() {
            out.push_str(&format!("\t// size={}", size));
        }
        out.push_str(&format!("\n}}{};\n", template.name()));
        out
    }
}

fn member_prefix(member: &Member) -> String {
    let indent = if member.is_padding() { "\t\t" } else { "\t" };
    format!("{}{} {}; ", indent, member.type_label(), member.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Offset, Size};

    fn sample(size: u64) -> StructureTemplate {
        let mut wide = Member::field(8, "uint8_t", "unk_10", Offset::new(0x10)).unwrap();
        wide.record_conflict(32);
        let members = vec![
            Member::field(32, "uint32_t", "unk_0C", Offset::new(0xc)).unwrap(),
            wide,
            Member::padding(Offset::new(0x11), 3, "uint8_t", "pad_").unwrap(),
        ];
        StructureTemplate::new("FOO".to_string(), Size::new(size), members)
    }

    #[test]
    fn test_render_layout() {
        let rendered = TemplateRenderer::new(21).render(&sample(0x14));
        let expected = "typedef struct{\n\
            \tuint32_t unk_0C;      // loc=0xC\n\
            \tuint8_t unk_10;       // loc=0x10 CONFLICT u32\n\
            \t\tuint8_t pad_11[0x3]; // loc=0x11\n\
            \t// size=0x14\n\
            }FOO;\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_without_size_leaves_blank_line() {
        let rendered = TemplateRenderer::new(0).render(&sample(0));
        assert!(rendered.ends_with("// loc=0x11\n\n}FOO;\n"));
        assert!(!rendered.contains("size="));
    }

    #[test]
    fn test_comment_column_grows_with_long_members() {
        let renderer = TemplateRenderer::new(4);
        assert_eq!(renderer.comment_column(&sample(0x14)), "\t\tuint8_t pad_11[0x3]; ".len());
        let empty = StructureTemplate::new("E".to_string(), Size::new(4), Vec::new());
        assert_eq!(renderer.render(&empty), "typedef struct{\n\t// size=0x4\n}E;\n");
    }

    #[test]
    fn test_comment_column_counts_chars() {
        let members = vec![Member::field(8, "uint8_t", "café", Offset::zero()).unwrap()];
        let template = StructureTemplate::new("C".to_string(), Size::new(1), members);
        let rendered = TemplateRenderer::new(0).render(&template);
        assert!(rendered.contains("\tuint8_t café; // loc=0x0\n"));
    }
}
