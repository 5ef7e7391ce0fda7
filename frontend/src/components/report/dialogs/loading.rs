use yew::prelude::*;

/// Full-screen blocking overlay shown while a submission is in flight.
pub fn loading_overlay(visible: bool) -> Html {
    if !visible {
        return html! {};
    }

    html! {
        <div
            id="loading-indicator"
            style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;"
        >
            <div style="background:#fff;padding:24px;border-radius:8px;display:flex;flex-direction:column;align-items:center;">
                <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
                <div style="margin-top:12px;color:#000;">{"Submitting report..."}</div>
            </div>
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}
