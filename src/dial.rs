use tracing::info;

use crate::assembler;
use crate::classifier;
use crate::config::SundialConfig;
use crate::error::Result;
use crate::guides;
use crate::sink::{self, DrawingRequest, DrawingSink};
use crate::types::{Classification, SampleTable};

#[derive(Debug, Clone, PartialEq)]
pub struct DialLayout {
    pub classification: Classification,
    pub requests: Vec<DrawingRequest>,
}

impl DialLayout {
    pub fn render<S: DrawingSink + ?Sized>(&self, sink: &mut S) {
        sink::render(&self.requests, sink);
    }
}

pub fn layout_dial(table: &SampleTable, config: &SundialConfig) -> Result<DialLayout> {
    config.validate()?;
    let classification = classifier::classify(table, config)?;

    let mut requests = Vec::new();
    if config.guides {
        requests.extend(guides::layout_guides(config, &table.label));
    }
    requests.extend(assembler::assemble(&classification, config));
    info!(
        "laid out {} drawing requests for {}",
        requests.len(),
        table.label
    );
    Ok(DialLayout {
        classification,
        requests,
    })
}
