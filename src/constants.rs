// DOM contract and front-end tuning

// Elements the scenes mount onto
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const ABOUT_CANVAS_ID: &str = "about-3d-bg"; // hosts the helix unless data-scene says otherwise
pub const CONTACT_CANVAS_ID: &str = "contact-canvas";
pub const PRELOADER_ID: &str = "preloader"; // container; the loader appends its own canvas
pub const LOADING_BAR_ID: &str = "loading-bar";
pub const SCENE_ATTR: &str = "data-scene";

// sessionStorage flag set on the first intro of a visit
pub const SESSION_VISITED_KEY: &str = "webnex_session_visited";
pub const SESSION_VISITED_VALUE: &str = "true";

// Preloader overlay
pub const PRELOADER_STYLE: &str = "display:block;opacity:1;position:fixed;top:0;left:0;width:100%;height:100%;z-index:100000;background:#000;overflow:hidden";
pub const PRELOADER_HIDDEN_STYLE: &str = "display:none";
pub const PRELOADER_CANVAS_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;display:block";
pub const LOADING_TEXT_STYLE: &str = "position:absolute;top:80%;width:100%;padding:0 20px;box-sizing:border-box;text-align:center;color:#fff;font-family:'Inter',sans-serif;pointer-events:none";
pub const LOADING_TITLE: &str = "Initializing Webnex";
pub const LOADING_TITLE_STYLE: &str = "font-weight:300;letter-spacing:5px;font-size:clamp(0.8rem,2vw,1.2rem);text-transform:uppercase";
pub const LOADING_TRACK_STYLE: &str = "width:min(300px,80%);height:2px;background:rgba(255,255,255,0.1);margin:15px auto;overflow:hidden;border-radius:2px";
pub const LOADING_BAR_STYLE: &str = "width:0%;height:100%;background:linear-gradient(90deg,#06b6d4,#8b5cf6);box-shadow:0 0 15px #06b6d4";

// Delay before a stopped frame loop frees its callback (ms)
pub const CALLBACK_RELEASE_DELAY_MS: u32 = 0;
