use crate::render::Renderer;
use anyhow::Context;
use character_viewer::CharacterSource;
use character_viewer::CharacterViewer;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "show", description = "show a single character and exit")]
pub struct Options {
    #[argh(positional, description = "the id of the character to show")]
    pub id: String,
}

pub async fn exec<S>(
    mut viewer: CharacterViewer<S>,
    renderer: Renderer,
    options: Options,
) -> anyhow::Result<()>
where
    S: CharacterSource,
{
    let id = options.id;
    viewer.set_input(id.as_str());
    viewer
        .search_by_id()
        .await
        .with_context(|| format!("failed to show character \"{id}\""))?;

    print!("{}", renderer.render(viewer.state()));

    Ok(())
}
