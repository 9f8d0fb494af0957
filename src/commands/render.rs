use crate::{
    RenderArgs,
    build::{
        Document, Renderer, SyntaxHighlighter,
        pipeline::{Pipeline, PipelineContext, ProcessingDocument},
    },
    config::Config,
};

pub fn run(args: &RenderArgs) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(args.config_file.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    let doc = Document::load(&args.input)?;
    let renderer = Renderer::new(&args.template)?;
    let highlighter = SyntaxHighlighter::from_config(&config.highlight);

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    let mut ctx = PipelineContext::new(&config.markdown, &highlighter, &renderer, &mut output);

    let mut doc = ProcessingDocument::new(doc);
    Pipeline::default_pipeline().run(&mut doc, &mut ctx)?;

    tracing::info!(
        input = %args.input.display(),
        template = %args.template.display(),
        "rendered page"
    );
    Ok(())
}
