use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"NeoWatch"</h1>
                <p class="sidebar-subtitle">"Near-Earth Object Tracker"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Dashboard"</a>
                </li>
                <li class="nav-item">
                    <a href="/details" class="nav-link">"Asteroid Details"</a>
                </li>
            </ul>
        </nav>
    }
}
