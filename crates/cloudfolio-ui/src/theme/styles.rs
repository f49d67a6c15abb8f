//! Global CSS styles for Cloudfolio.
//!
//! Light sky aesthetic: white-to-sky gradient, soft shadows, rounded tiles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SKY (Brand, Links, Icons) */
  --sky-50: #f0f9ff;
  --sky-300: #7dd3fc;
  --sky-500: #0ea5e9;
  --sky-600: #0284c7;
  --sky-700: #0369a1;

  /* ACCENTS */
  --yellow-500: #eab308;

  /* NEUTRALS */
  --slate-100: #f1f5f9;
  --slate-200: #e2e8f0;
  --gray-200: #e5e7eb;
  --gray-500: #6b7280;
  --gray-700: #374151;
  --gray-800: #1f2937;

  /* Layout */
  --nav-height: 2.75rem;
  --anchor-offset: 5rem;
  --radius-card: 0.75rem;
  --radius-badge: 1rem;

  /* Elevation */
  --shadow-sm: 0 1px 2px rgba(15, 23, 42, 0.08);
  --shadow-lg: 0 10px 15px -3px rgba(15, 23, 42, 0.12), 0 4px 6px -4px rgba(15, 23, 42, 0.1);

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-flip: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: ui-sans-serif, system-ui, sans-serif;
  color: var(--gray-800);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Shell === */
.page-shell {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
  background: linear-gradient(to bottom right, var(--sky-50), #ffffff);
}

.page-body {
  position: relative;
  z-index: 10;
  padding: 1.5rem;
}

.page-anchor {
  scroll-margin-top: var(--anchor-offset);
}

/* === Navigation === */
.nav-bar {
  position: sticky;
  top: 0;
  z-index: 30;
  height: var(--nav-height);
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 2rem;
  font-size: 0.875rem;
  font-weight: 500;
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--slate-100);
  box-shadow: var(--shadow-sm);
}

.nav-bar__link {
  transition: color var(--transition-fast);
}

.nav-bar__link:hover {
  color: var(--sky-600);
}

/* === Profile Header === */
.profile-header {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  align-items: center;
  margin: 4rem 0;
}

.profile-header__body {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.profile-header__photo {
  width: 10rem;
  height: 10rem;
  border-radius: 9999px;
  border: 4px solid var(--gray-200);
  object-fit: cover;
  box-shadow: var(--shadow-lg);
}

.profile-header__name {
  font-size: 1.875rem;
  font-weight: 700;
  margin-top: 1.5rem;
}

.profile-header__title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-top: 0.5rem;
  color: var(--sky-700);
}

.profile-header__socials {
  display: flex;
  gap: 1.5rem;
  margin-top: 1rem;
}

.social-link {
  color: var(--gray-500);
  transition: color var(--transition-fast);
}

.social-link--linkedin:hover {
  color: #1d4ed8;
}

.social-link--github:hover {
  color: #000000;
}

/* === Banner & Intro === */
.banner {
  text-align: center;
  margin-bottom: 2.5rem;
}

.banner__title {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  font-size: 2.25rem;
  font-weight: 700;
}

.intro {
  max-width: 48rem;
  margin: 0 auto 4rem;
  text-align: center;
  font-size: 1.125rem;
  line-height: 1.75;
}

.divider {
  max-width: 56rem;
  margin: 0 auto 3rem;
  border: none;
  border-top: 1px solid var(--slate-200);
}

/* === Sections === */
.content-column {
  max-width: 72rem;
  margin: 0 auto 5rem;
}

.content-row {
  display: flex;
  flex-direction: column;
  gap: 3rem;
  margin-bottom: 3rem;
}

.content-row__cell {
  flex: 1;
}

.section-heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.section-heading--spacious {
  margin-bottom: 2.5rem;
}

/* === Flip Cards === */
.toolbox-grid {
  display: grid;
  gap: 1rem;
}

.flip-card {
  outline: none;
}

.flip-card:focus-visible .flip-card__tile {
  box-shadow: 0 0 0 3px var(--sky-300);
}

.flip-card__tile {
  position: relative;
  width: 100%;
  height: 8rem;
  border-width: 2px;
  border-style: solid;
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-sm);
  transform-style: preserve-3d;
  transition: transform var(--transition-flip), box-shadow var(--transition-fast);
}

.flip-card__tile:hover {
  box-shadow: var(--shadow-lg);
}

.flip-card__face {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem;
  cursor: pointer;
  user-select: none;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
}

.flip-card__face--back {
  transform: rotateY(180deg);
}

.flip-card__icon {
  font-size: 1.875rem;
}

.flip-card__label {
  font-weight: 600;
  text-align: center;
}

.flip-card__value {
  font-weight: 500;
  text-align: center;
  opacity: 0.8;
}

/* === Certifications === */
.cert-gallery {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.cert-badge {
  width: 10rem;
  height: 10rem;
  padding: 0.75rem;
  border-radius: var(--radius-badge);
  background: #ffffff;
  object-fit: contain;
  box-shadow: var(--shadow-lg);
  transition: transform 250ms cubic-bezier(0.34, 1.56, 0.64, 1);
}

.cert-badge:hover {
  transform: scale(1.08) rotate(0.3deg);
}

/* === Career Timeline === */
.career-item {
  display: flex;
  align-items: flex-start;
  gap: 2rem;
  margin-bottom: 3rem;
}

.career-item__meta {
  width: 16rem;
  flex-shrink: 0;
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  padding: 0.5rem 1rem 0 0;
  text-align: right;
}

.career-item__title {
  font-size: 1.125rem;
  font-weight: 700;
}

.career-item__caption {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--gray-500);
}

.career-card {
  flex: 1;
  padding: 1.5rem;
  border: 1px solid var(--gray-200);
  border-radius: var(--radius-card);
  background: #ffffff;
  box-shadow: var(--shadow-sm);
}

.career-card__description {
  color: var(--gray-700);
  margin-bottom: 1rem;
}

.career-project {
  margin-bottom: 1.5rem;
}

.career-project__name {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.bullet-list {
  list-style: disc;
  padding-left: 1.5rem;
}

.bullet-list li + li {
  margin-top: 0.25rem;
}

/* === Footer === */
.site-footer {
  margin-top: 4rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--gray-500);
}

/* === Floating Clouds === */
.floating-clouds {
  position: absolute;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.floating-cloud {
  position: absolute;
  opacity: 0.7;
  animation: drift linear infinite;
}

@keyframes drift {
  from { transform: translateX(-20vw); }
  to { transform: translateX(120vw); }
}

/* === Enter Animations === */
.enter-fade-down {
  animation: fade-down 800ms ease-out both;
}

.enter-fade-up {
  animation: fade-up 400ms ease-out both;
}

.enter-fade-slow {
  animation: fade-down 2500ms ease-out both;
}

@keyframes fade-down {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (prefers-reduced-motion: reduce) {
  .enter-fade-down, .enter-fade-up, .enter-fade-slow, .floating-cloud {
    animation: none;
  }

  .flip-card__tile {
    transition: none;
  }
}

/* === Content Palette === */
.bg-sky-50 { background-color: #f0f9ff; }
.bg-emerald-50 { background-color: #ecfdf5; }
.bg-indigo-50 { background-color: #eef2ff; }
.bg-yellow-50 { background-color: #fefce8; }
.bg-pink-50 { background-color: #fdf2f8; }
.bg-gray-50 { background-color: #f9fafb; }

.border-sky-300 { border-color: #7dd3fc; }
.border-emerald-300 { border-color: #6ee7b7; }
.border-indigo-300 { border-color: #a5b4fc; }
.border-yellow-300 { border-color: #fde047; }
.border-pink-300 { border-color: #f9a8d4; }
.border-gray-300 { border-color: #d1d5db; }

.text-sky-800 { color: #075985; }
.text-emerald-800 { color: #065f46; }
.text-indigo-800 { color: #3730a3; }
.text-yellow-800 { color: #854d0e; }
.text-pink-800 { color: #9d174d; }
.text-gray-800 { color: #1f2937; }

.text-brown-600 { color: #92400e; }
.text-blue-600 { color: #2563eb; }
.text-green-600 { color: #16a34a; }
.text-purple-600 { color: #9333ea; }
.text-yellow-600 { color: #ca8a04; }
.text-red-600 { color: #dc2626; }

/* === Responsive === */
@media (min-width: 768px) {
  .content-row {
    flex-direction: row;
  }

  .toolbox-grid {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }

  .flip-card__tile {
    height: 10rem;
  }
}

@media (max-width: 640px) {
  .career-item {
    flex-direction: column;
    gap: 1rem;
  }

  .career-item__meta {
    width: auto;
    align-items: flex-start;
    text-align: left;
  }

  .nav-bar {
    gap: 1rem;
  }
}
"#;
