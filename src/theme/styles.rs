//! Global CSS for the showcase application.
//!
//! RTL-first layout; Hebrew system fonts with Latin fallbacks.

pub const GLOBAL_STYLES: &str = r#"
/* === Custom Properties === */
:root {
  /* Surfaces */
  --bg: #faf8f4;
  --surface: #ffffff;
  --border: #e4ded2;

  /* Ink */
  --ink: #20242b;
  --ink-secondary: rgba(32, 36, 43, 0.72);
  --ink-muted: rgba(32, 36, 43, 0.5);

  /* Accent */
  --teal: #0f766e;
  --teal-soft: rgba(15, 118, 110, 0.12);
  --amber: #b45309;

  /* Semantic */
  --success: #15803d;
  --danger: #b91c1c;
  --info: #1d4ed8;

  /* Typography */
  --font-ui: 'Heebo', 'Assistant', 'Segoe UI', 'Arial Hebrew', sans-serif;

  /* Motion */
  --transition: 0.18s ease;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--ink);
  font-family: var(--font-ui);
  line-height: 1.6;
}

.app-root { min-height: 100vh; display: flex; flex-direction: column; }

/* === Typography === */
.page-title { font-size: 3rem; margin: 0; color: var(--teal); letter-spacing: 0.02em; }
.tagline { color: var(--ink-secondary); font-size: 1.125rem; margin-top: 0.25rem; }
.section-header { font-size: 1.25rem; margin: 0 0 0.75rem; color: var(--ink); }
.body-text { color: var(--ink-secondary); max-width: 42rem; }

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-danger, .btn-pill {
  font-family: var(--font-ui);
  font-size: 1rem;
  border-radius: 8px;
  padding: 0.5rem 1.25rem;
  cursor: pointer;
  transition: background var(--transition), border-color var(--transition);
}

.btn-primary {
  background: var(--teal);
  color: #ffffff;
  border: 1px solid var(--teal);
}
.btn-primary:hover { background: #0b5d57; }

.btn-ghost {
  background: transparent;
  color: var(--teal);
  border: 1px solid var(--border);
}
.btn-ghost:hover { border-color: var(--teal); background: var(--teal-soft); }

.btn-danger {
  background: transparent;
  color: var(--danger);
  border: 1px solid var(--danger);
}
.btn-danger:hover { background: rgba(185, 28, 28, 0.08); }

.btn-pill {
  background: transparent;
  color: var(--ink-secondary);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.25rem 0.9rem;
  font-size: 0.875rem;
}
.btn-pill.selected {
  background: var(--teal-soft);
  color: var(--teal);
  border-color: var(--teal);
}

button:disabled { opacity: 0.5; cursor: not-allowed; }

.icon-btn {
  background: none;
  border: none;
  color: var(--ink-muted);
  font-size: 1.1rem;
  cursor: pointer;
  padding: 0.1rem 0.4rem;
}
.icon-btn:hover { color: var(--ink); }

/* === NavBar === */
.navbar {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 0.75rem 1.5rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}
.navbar-brand { font-size: 1.25rem; font-weight: 700; color: var(--teal); }
.navbar-links { display: flex; gap: 0.5rem; list-style: none; margin: 0; padding: 0; }
.nav-link {
  background: none;
  border: none;
  font-family: var(--font-ui);
  font-size: 1rem;
  color: var(--ink-secondary);
  padding: 0.35rem 0.75rem;
  border-radius: 6px;
  cursor: pointer;
}
.nav-link:hover { color: var(--ink); background: var(--teal-soft); }
.nav-link.active { color: var(--teal); font-weight: 600; }
.navbar-end { margin-inline-start: auto; display: flex; align-items: center; gap: 0.75rem; }

/* === Footer === */
.footer {
  margin-top: auto;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.5rem;
  border-top: 1px solid var(--border);
  color: var(--ink-muted);
  font-size: 0.875rem;
}

/* === Avatar === */
.avatar {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--teal-soft);
  color: var(--teal);
  font-weight: 600;
  overflow: visible;
}
.avatar-sm { width: 28px; height: 28px; font-size: 0.7rem; }
.avatar-md { width: 40px; height: 40px; font-size: 0.9rem; }
.avatar-lg { width: 56px; height: 56px; font-size: 1.2rem; }
.avatar-image { width: 100%; height: 100%; border-radius: 50%; object-fit: cover; }
.presence-dot {
  position: absolute;
  bottom: 0;
  inset-inline-end: 0;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--ink-muted);
  border: 2px solid var(--surface);
}
.presence-dot.online { background: var(--success); }

/* === Spinners === */
.spinner-ring { display: inline-flex; }
.spinner-ring svg { animation: spin 0.9s linear infinite; }
.spinner-track { stroke: var(--border); }
.spinner-arc { stroke: var(--teal); }
@keyframes spin { to { transform: rotate(360deg); } }

.spinner-dots { display: inline-flex; gap: 4px; }
.spinner-dots .dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--teal);
  animation: pulse 1s ease-in-out infinite;
}
.spinner-dots .dot:nth-child(2) { animation-delay: 0.15s; }
.spinner-dots .dot:nth-child(3) { animation-delay: 0.3s; }
@keyframes pulse { 0%, 100% { opacity: 0.25; } 50% { opacity: 1; } }

.spinner-bar { width: 120px; }
.bar-track { height: 4px; background: var(--border); border-radius: 2px; overflow: hidden; }
.bar-fill {
  width: 40%;
  height: 100%;
  background: var(--teal);
  border-radius: 2px;
  animation: slide 1.2s ease-in-out infinite;
}
@keyframes slide {
  0% { transform: translateX(160%); }
  100% { transform: translateX(-260%); }
}

/* === Toasts === */
.toast-viewport {
  position: fixed;
  bottom: 1rem;
  inset-inline-start: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
}
.toast {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-inline-start: 4px solid var(--info);
  border-radius: 8px;
  padding: 0.6rem 1rem;
  box-shadow: 0 4px 16px rgba(32, 36, 43, 0.12);
}
.toast-success { border-inline-start-color: var(--success); }
.toast-error { border-inline-start-color: var(--danger); }

/* === Gender Switcher === */
.gender-switcher { display: inline-flex; gap: 0.4rem; flex-wrap: wrap; }

/* === Pages === */
.landing {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 4rem 2rem;
  text-align: center;
}
.landing-choice {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.gallery { flex: 1; padding: 2rem 1.5rem; display: flex; flex-direction: column; gap: 2rem; }
.gallery-section {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.25rem 1.5rem;
}
.gallery-row { display: flex; align-items: center; gap: 1rem; flex-wrap: wrap; }

.document-preview {
  margin-top: 1rem;
  border: 1px dashed var(--border);
  border-radius: 8px;
  padding: 1rem 1.25rem;
  background: var(--bg);
}
.document-title { font-weight: 700; margin: 0 0 0.5rem; }
.document-body { margin: 0.25rem 0; color: var(--ink-secondary); }
"#;
