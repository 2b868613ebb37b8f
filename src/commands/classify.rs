use nu_plugin::{EngineInterface, EvaluatedCall, PluginCommand};
use nu_protocol::{Category, Example, LabeledError, PipelineData, Signature, Type, Value};

use super::util::{json_to_nu, labeled, normalize_input, nu_to_json};
use crate::ops;
use crate::PageTopicsPlugin;

pub struct Classify;

impl PluginCommand for Classify {
    type Plugin = PageTopicsPlugin;

    fn name(&self) -> &str {
        "page-topics classify"
    }

    fn description(&self) -> &str {
        "Classify pages as product, news, article, or other"
    }

    fn signature(&self) -> Signature {
        Signature::build(self.name())
            .input_output_type(Type::table(), Type::table())
            .category(Category::Experimental)
    }

    fn search_terms(&self) -> Vec<&str> {
        vec!["classify", "page", "type", "genre"]
    }

    fn examples(&self) -> Vec<Example<'_>> {
        vec![Example {
            example: r#"[{url: "https://example.com/p", title: "Toaster - Add to Cart"}] | page-topics classify"#,
            description: "Detect a product page",
            result: None,
        }]
    }

    fn run(
        &self,
        _plugin: &PageTopicsPlugin,
        _engine: &EngineInterface,
        call: &EvaluatedCall,
        input: PipelineData,
    ) -> Result<PipelineData, LabeledError> {
        let head = call.head;
        let rows = normalize_input(input)?;
        if rows.is_empty() {
            return Ok(PipelineData::Value(Value::list(vec![], head), None));
        }
        let docs = serde_json::Value::Array(rows.iter().map(nu_to_json).collect());
        let classified = ops::op_classify(&docs).map_err(labeled)?;
        Ok(PipelineData::Value(json_to_nu(&classified, head), None))
    }
}
