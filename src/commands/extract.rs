use nu_plugin::{EngineInterface, EvaluatedCall, PluginCommand};
use nu_protocol::{
    Category, Example, LabeledError, PipelineData, Signature, SyntaxShape, Type, Value,
};

use super::util::{json_to_nu, labeled, normalize_input, nu_to_json, with_url};
use crate::ops;
use crate::pipeline::ExtractOptions;
use crate::PageTopicsPlugin;

pub struct Extract;

impl PluginCommand for Extract {
    type Plugin = PageTopicsPlugin;

    fn name(&self) -> &str {
        "page-topics extract"
    }

    fn description(&self) -> &str {
        "Extract ranked, de-duplicated topical phrases from extracted page content"
    }

    fn signature(&self) -> Signature {
        Signature::build(self.name())
            .input_output_types(vec![
                (Type::record(), Type::record()),
                (Type::table(), Type::table()),
            ])
            .named(
                "url",
                SyntaxShape::String,
                "Page URL, used when the record has no url column",
                Some('u'),
            )
            .named(
                "top-k",
                SyntaxShape::Int,
                "Number of topics to return (default: 8)",
                Some('k'),
            )
            .named(
                "threshold",
                SyntaxShape::Float,
                "Jaccard similarity that marks two topics as duplicates (default: 0.8)",
                Some('t'),
            )
            .switch(
                "css-topics",
                "Also mine semantic CSS class and id names",
                Some('c'),
            )
            .category(Category::Experimental)
    }

    fn search_terms(&self) -> Vec<&str> {
        vec!["topics", "keywords", "keyphrases", "page", "extract"]
    }

    fn examples(&self) -> Vec<Example<'_>> {
        vec![
            Example {
                example: r#"{title: "Compact Toaster Oven", headings: ["Bagel setting"]} | page-topics extract --url https://example.com/toasters"#,
                description: "Topics for one content bundle",
                result: None,
            },
            Example {
                example: r#"open pages.json | page-topics extract --top-k 5"#,
                description: "Topics for a table of page documents",
                result: None,
            },
        ]
    }

    fn run(
        &self,
        _plugin: &PageTopicsPlugin,
        _engine: &EngineInterface,
        call: &EvaluatedCall,
        input: PipelineData,
    ) -> Result<PipelineData, LabeledError> {
        let url: Option<String> = call.get_flag("url")?;
        let top_k = call.get_flag::<i64>("top-k")?.unwrap_or(8);
        let threshold: f64 = call.get_flag::<f64>("threshold")?.unwrap_or(0.8);
        let include_css_topics: bool = call.has_flag("css-topics")?;
        let head = call.head;

        if top_k < 0 {
            return Err(LabeledError::new("--top-k must not be negative"));
        }
        let opts = ExtractOptions {
            top_k: top_k as usize,
            include_css_topics,
            similarity_threshold: threshold,
        };

        let single = matches!(input, PipelineData::Value(Value::Record { .. }, _));
        let rows = normalize_input(input)?;
        let docs: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                let mut doc = nu_to_json(row);
                with_url(&mut doc, url.as_deref());
                doc
            })
            .collect();

        let reports = ops::op_extract(&serde_json::Value::Array(docs), &opts).map_err(labeled)?;
        let output = match reports {
            serde_json::Value::Array(mut arr) if single && arr.len() == 1 => arr.remove(0),
            other => other,
        };

        Ok(PipelineData::Value(json_to_nu(&output, head), None))
    }
}
