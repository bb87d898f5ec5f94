//! TikZ mindmap document generation

use thiserror::Error;

use crate::theme::{ColorDef, NodeSpec, Theme, BRANCH_COUNT, LEAVES_PER_BRANCH};

use super::DocumentConfig;

/// Errors that can occur during document assembly
#[derive(Error, Debug)]
pub enum TexError {
    #[error("the logo requires exactly {expected} branch nodes, {actual} were supplied")]
    BranchCount { expected: usize, actual: usize },
}

/// Build the TeX document incrementally
///
/// Sections are collected separately and concatenated by [`build`], so the
/// section order in the output never depends on call order.
///
/// [`build`]: TexBuilder::build
pub struct TexBuilder {
    config: DocumentConfig,
    header: Vec<String>,
    colors: Vec<String>,
    options: Vec<String>,
    root: String,
    branches: Vec<String>,
}

impl TexBuilder {
    /// Create a new document builder
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            header: vec![],
            colors: vec![],
            options: vec![],
            root: String::new(),
            branches: vec![],
        }
    }

    /// Add the document class, font setup, and TikZ libraries
    pub fn add_header(&mut self, font: &str) {
        let convert = match &self.config.convert_to {
            Some(ext) => format!(",convert={{outfile=\\jobname.{}}}", ext),
            None => String::new(),
        };
        self.header
            .push(format!("\\documentclass[tikz{}]{{standalone}}", convert));
        self.header.push("\\usepackage{fontspec}".to_string());
        self.header.push(format!("\\setmainfont{{{}}}", font));
        self.header
            .push("\\usetikzlibrary{mindmap,backgrounds}".to_string());
    }

    /// Add a `\definecolor` for one color in the given color model
    ///
    /// The value is written verbatim; callers own its validity in the model.
    pub fn add_color(&mut self, model: &str, color: &ColorDef) {
        self.colors.push(format!(
            "\\definecolor{{{}}}{{{}}}{{{}}}",
            color.name, model, color.value
        ));
    }

    /// Add the tikzpicture options for the mindmap
    ///
    /// Sibling angles are derived from the counts so the branch ring and
    /// each leaf ring close over a full circle.
    pub fn add_mindmap_options(&mut self, theme: &Theme) {
        let branch_angle = sibling_angle(theme.nodes.len());
        let leaf_angle = sibling_angle(LEAVES_PER_BRANCH);

        self.options.push("mindmap".to_string());
        self.options.push("grow cyclic".to_string());
        self.options.push("every node/.style={concept}".to_string());
        self.options
            .push(format!("concept color={}", theme.concept.name));
        self.options.push(format!("text={}", theme.text.name));
        self.options.push(format!(
            "level 1/.append style={{level distance={}, sibling angle={}}}",
            self.config.level_one_distance, branch_angle
        ));
        self.options.push(format!(
            "level 2/.append style={{level distance={}, sibling angle={}}}",
            self.config.level_two_distance, leaf_angle
        ));
        self.options.push(format!(
            "background rectangle/.style={{fill={}}}",
            theme.background.name
        ));
        self.options.push("show background rectangle".to_string());
    }

    /// Add the root concept node
    ///
    /// An empty `root_label` renders an empty node, suppressing in-image text.
    pub fn add_root(&mut self, theme: &Theme) {
        let font = root_font(&theme.root_font_style, &theme.root_font_size);
        self.root = if font.is_empty() {
            format!("\\node {{{}}}", theme.root_label)
        } else {
            format!("\\node[font={}] {{{}}}", font, theme.root_label)
        };
    }

    /// Add one branch node with its ring of empty leaf children
    pub fn add_branch(&mut self, node: &NodeSpec, leaves: usize) {
        let mut branch = format!(
            "  child[concept color={}] {{ node {{{}}}\n",
            node.color.name, node.label
        );
        for _ in 0..leaves {
            branch.push_str("    child { node {} }\n");
        }
        branch.push_str("  }");
        self.branches.push(branch);
    }

    /// Build the final document string
    pub fn build(self) -> String {
        let mut tex = String::new();

        for line in &self.header {
            tex.push_str(line);
            tex.push('\n');
        }
        for line in &self.colors {
            tex.push_str(line);
            tex.push('\n');
        }

        tex.push_str("\\begin{document}\n");
        tex.push_str("\\begin{tikzpicture}[\n");
        for option in &self.options {
            tex.push_str("  ");
            tex.push_str(option);
            tex.push_str(",\n");
        }
        tex.push_str("]\n");

        tex.push_str(&self.root);
        tex.push('\n');
        for branch in &self.branches {
            tex.push_str(branch);
            tex.push('\n');
        }
        tex.push_str(";\n");

        tex.push_str("\\end{tikzpicture}\n");
        tex.push_str("\\end{document}\n");

        tex
    }
}

/// Assemble the complete document for a theme
///
/// The only validation performed is the branch count; label and color text
/// pass through verbatim, so callers may embed raw TeX markup.
pub fn build_document(theme: &Theme, config: &DocumentConfig) -> Result<String, TexError> {
    if theme.nodes.len() != BRANCH_COUNT {
        return Err(TexError::BranchCount {
            expected: BRANCH_COUNT,
            actual: theme.nodes.len(),
        });
    }

    let mut builder = TexBuilder::new(config.clone());

    builder.add_header(&theme.font);
    for color in theme.defined_colors() {
        builder.add_color(&theme.color_model, color);
    }
    builder.add_mindmap_options(theme);
    builder.add_root(theme);
    for node in &theme.nodes {
        builder.add_branch(node, LEAVES_PER_BRANCH);
    }

    Ok(builder.build())
}

/// Angle between adjacent siblings so `count` of them close a full circle
///
/// Whole angles print without a decimal part, the rest round to two places.
fn sibling_angle(count: usize) -> String {
    let angle = 360.0 / count as f64;
    if angle.fract() == 0.0 {
        format!("{}", angle as i64)
    } else {
        format!("{:.2}", angle)
    }
}

/// Combine font style and size command names into a TeX font option
fn root_font(style: &str, size: &str) -> String {
    let mut font = String::new();
    if !style.is_empty() {
        font.push('\\');
        font.push_str(style);
    }
    if !size.is_empty() {
        font.push('\\');
        font.push_str(size);
    }
    font
}
