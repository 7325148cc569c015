//! Global CSS styles for the Recipe Gallery.
//!
//! Colors come from custom properties switched by the `data-theme`
//! attribute on the document root.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root,
:root[data-theme="dark"] {
  /* Surfaces */
  --bg: #121212;
  --surface: #1e1e1e;
  --surface-raised: #262626;
  --border: rgba(255, 255, 255, 0.08);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);

  /* Accents */
  --accent: #d9534f;
  --accent-soft: rgba(217, 83, 79, 0.25);
  --link: #e8a87c;

  /* Overlay */
  --overlay: rgba(0, 0, 0, 0.75);
  --fade-from: #1e1e1e;
}

:root[data-theme="light"] {
  --bg: #faf7f2;
  --surface: #ffffff;
  --surface-raised: #f3eee6;
  --border: rgba(0, 0, 0, 0.08);

  --text-primary: #1d1d1d;
  --text-secondary: rgba(29, 29, 29, 0.7);

  --accent: #b23a36;
  --accent-soft: rgba(178, 58, 54, 0.15);
  --link: #9c4a16;

  --overlay: rgba(20, 20, 20, 0.55);
  --fade-from: #ffffff;
}

:root {
  --font-serif: 'Noto Serif JP', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

body.modal-open {
  overflow: hidden;
}

/* === Header === */
.gallery-header {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: space-between;
  gap: 1.5rem;
  padding: 2.5rem 2rem 1.5rem;
}

.gallery-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  font-weight: 600;
}

.gallery-subtitle {
  color: var(--text-secondary);
  max-width: 40rem;
}

.gallery-header__controls {
  display: flex;
  gap: 0.75rem;
}

#language-select,
.theme-toggle {
  background: var(--surface-raised);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.5rem 0.9rem;
  font: inherit;
  cursor: pointer;
}

/* === Card Grid === */
.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
  padding: 0 2rem 3rem;
}

.card {
  display: flex;
  flex-direction: column;
  text-align: left;
  background: var(--surface);
  color: inherit;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  font: inherit;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.card:hover,
.card:focus-visible {
  transform: translateY(-3px);
  box-shadow: 0 10px 24px var(--accent-soft);
  outline: none;
}

.thumb img {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  display: block;
}

.card-info {
  padding: 1rem 1.1rem 1.2rem;
}

.card-info .title {
  font-family: var(--font-serif);
  font-size: 1.2rem;
  font-weight: 600;
}

.card-info .desc {
  color: var(--text-secondary);
  font-size: 0.9rem;
  margin-top: 0.25rem;
}

.card-info .sub {
  color: var(--accent);
  font-size: 0.8rem;
  margin-top: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

/* === Inline Error === */
.error-box {
  grid-column: 1 / -1;
  padding: 16px;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--surface-raised);
  color: var(--text-primary);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: var(--overlay);
  z-index: 100;
  padding: 2rem;
}

.modal-overlay.open {
  display: flex;
}

.modal {
  position: relative;
  display: grid;
  grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
  width: min(1000px, 100%);
  max-height: 90vh;
  background: var(--surface);
  border-radius: var(--radius);
  overflow: hidden;
}

.close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 2;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  border: none;
  background: var(--surface-raised);
  color: var(--text-primary);
  cursor: pointer;
  font-size: 1rem;
}

.modal-image-wrap {
  position: relative;
  background: #000;
}

.modal-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.modal-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.5);
  color: #fff;
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

.modal-arrow.left { left: 0.75rem; }
.modal-arrow.right { right: 0.75rem; }

.recipe-panel {
  position: relative;
  min-height: 0;
}

.recipe-content {
  height: 100%;
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem 1.75rem;
}

.recipe-content h2 {
  font-family: var(--font-serif);
  font-size: 1.8rem;
  padding-right: 2.5rem;
}

.recipe-content h3 {
  margin: 1.5rem 0 0.5rem;
  color: var(--accent);
  font-size: 1rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.recipe-content ul,
.recipe-content ol {
  padding-left: 1.25rem;
}

.fade-top,
.fade-bottom {
  position: absolute;
  left: 0;
  right: 0;
  height: 2.5rem;
  pointer-events: none;
  z-index: 1;
  transition: opacity var(--transition-fast);
}

.fade-top {
  top: 0;
  background: linear-gradient(var(--fade-from), transparent);
}

.fade-bottom {
  bottom: 0;
  background: linear-gradient(transparent, var(--fade-from));
}

.video-frame-wrap iframe {
  border-radius: 8px;
}

.locations-list {
  list-style: none;
  padding-left: 0 !important;
}

.locations-list li {
  padding: 0.6rem 0;
  border-bottom: 1px solid var(--border);
}

.location-link {
  color: var(--link);
  font-size: 0.9rem;
}

@media (max-width: 760px) {
  .modal {
    grid-template-columns: 1fr;
    overflow-y: auto;
  }

  .modal-image {
    max-height: 40vh;
  }
}
"#;
