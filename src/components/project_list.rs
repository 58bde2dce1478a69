use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Project;
use crate::services::fetch_projects;

#[function_component(ProjectList)]
pub fn project_list() -> Html {
    let auth = use_auth();
    let projects = use_state(Vec::<Project>::new);
    let loading = use_state(|| true);

    {
        let projects = projects.clone();
        let loading = loading.clone();
        let client = auth.viewmodel().client().clone();
        let token = auth
            .snapshot
            .session
            .as_ref()
            .map(|s| s.access_token.clone());

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_projects(&client, token.as_deref()).await {
                    Ok(items) => projects.set(items),
                    Err(e) => log::error!("❌ Error loading projects: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="list-loading">{"Loading projects..."}</div> };
    }

    html! {
        <div class="project-list">
            <h2>{"Community Projects"}</h2>
            {if projects.is_empty() {
                html! { <p class="list-empty">{"No projects yet"}</p> }
            } else {
                projects.iter().map(|project| {
                    html! {
                        <div class="project-card" key={project.id.clone()}>
                            <div class="project-card-header">
                                <h3>{project.title.clone()}</h3>
                                <span class="project-status">{project.status.clone()}</span>
                            </div>
                            {if let Some(desc) = &project.description {
                                html! { <p>{desc.clone()}</p> }
                            } else {
                                html! {}
                            }}
                            <div class="project-progress">
                                <div class="progress-bar">
                                    <div
                                        class="progress-fill"
                                        style={format!("width: {}%", project.progress_percent())}
                                    />
                                </div>
                                <span>{format!("{}%", project.progress_percent())}</span>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }}
        </div>
    }
}
