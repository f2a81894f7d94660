use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use vercflow_core::convert::{formalize, ConversionRequest};

#[allow(clippy::too_many_arguments)]
pub fn run(
    root: &Path,
    id: &str,
    title: String,
    description: String,
    project: String,
    professional: Option<String>,
    planned_value: f64,
    json: bool,
) -> anyhow::Result<()> {
    let req = ConversionRequest {
        title,
        description,
        project,
        professional,
        planned_value,
    };

    let activity =
        formalize(root, id, &req).with_context(|| format!("failed to convert record '{id}'"))?;

    if json {
        print_json(&activity)?;
    } else {
        println!("Converted {} into activity {}", id, activity.id);
        println!("Project: {}", activity.project);
        if let Some(ref professional) = activity.professional {
            println!("Professional: {professional}");
        }
    }
    Ok(())
}
