//! Global CSS styles for Character Hub.
//!
//! Frosted-glass panels over a slate and purple night gradient.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --slate-900: #0f172a;
  --slate-800: #1e293b;
  --purple-900: #581c87;
  --glass: rgba(255, 255, 255, 0.1);
  --glass-faint: rgba(255, 255, 255, 0.05);
  --glass-border: rgba(255, 255, 255, 0.2);

  /* Accents */
  --purple-200: #e9d5ff;
  --purple-300: #d8b4fe;
  --purple-400: #c084fc;
  --purple-500: #a855f7;
  --pink-500: #ec4899;
  --yellow-400: #facc15;

  /* Rarity borders */
  --border-common: rgba(107, 114, 128, 0.5);
  --border-rare: rgba(59, 130, 246, 0.5);
  --border-epic: rgba(168, 85, 247, 0.5);
  --border-legendary: rgba(234, 179, 8, 0.5);

  /* TEXT */
  --text-primary: #ffffff;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
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
  font-family: var(--font-sans);
  background: linear-gradient(135deg, var(--slate-900), var(--purple-900), var(--slate-900));
  background-attachment: fixed;
  color: var(--text-primary);
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
}

/* === Animations === */
@keyframes fade-up {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-down {
  from { transform: translateY(-100px); }
  to { transform: translateY(0); }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.9); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.page {
  min-height: 100vh;
}

/* === Navigation Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: rgba(15, 23, 42, 0.8);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid rgba(168, 85, 247, 0.3);
  animation: slide-down var(--transition-slow);
}

.nav-header__inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-brand__icon {
  font-size: 1.75rem;
  color: var(--purple-400);
}

.nav-brand__title {
  font-size: 1.5rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.nav-link {
  color: var(--purple-200);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.btn-submit {
  background: linear-gradient(90deg, var(--purple-500), var(--pink-500));
  color: var(--text-primary);
  padding: 0.5rem 1.5rem;
  border-radius: 9999px;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal);
}

.btn-submit:hover {
  transform: scale(1.05);
  box-shadow: 0 10px 25px rgba(168, 85, 247, 0.5);
}

.btn-submit:active {
  transform: scale(0.95);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }
}

/* === Hero === */
.hero {
  padding: 8rem 1rem 5rem;
  max-width: 72rem;
  margin: 0 auto;
  text-align: center;
  animation: fade-up 0.8s ease;
}

.page-title {
  font-size: 4rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.gradient-text {
  background: linear-gradient(90deg, var(--purple-400), var(--pink-500));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.tagline {
  font-size: 1.25rem;
  color: var(--purple-200);
  max-width: 42rem;
  margin: 0 auto 3rem;
}

.hero-badges {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 2rem;
  margin-bottom: 3rem;
}

.hero-badge {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  background: var(--glass);
  backdrop-filter: blur(12px);
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  font-weight: 600;
  transition: transform var(--transition-fast);
}

.hero-badge:hover {
  transform: scale(1.05);
}

.hero-badge__icon {
  font-size: 1.5rem;
}

/* === Filter Bar === */
.filter-bar {
  max-width: 42rem;
  margin: 0 auto;
}

.search-box {
  position: relative;
  margin-bottom: 2rem;
}

.search-box__icon {
  position: absolute;
  left: 1rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--purple-300);
}

.search-box__input {
  width: 100%;
  padding: 1rem 1rem 1rem 3rem;
  background: var(--glass);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(216, 180, 254, 0.3);
  border-radius: 1rem;
  color: var(--text-primary);
  font-size: 1rem;
  transition: box-shadow var(--transition-normal);
}

.search-box__input::placeholder {
  color: var(--purple-300);
}

.search-box__input:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--purple-500);
}

.filter-selects {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.filter-select {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--glass);
  backdrop-filter: blur(12px);
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
}

.filter-select__icon {
  color: var(--purple-300);
}

.filter-select select {
  background: transparent;
  color: var(--text-primary);
  border: none;
  font-size: 1rem;
  cursor: pointer;
}

.filter-select select:focus {
  outline: none;
}

.filter-select option {
  background: var(--slate-800);
}

/* === Character Grid === */
.character-section {
  max-width: 80rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.character-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.5rem;
}

/* === Character Card === */
.character-card {
  position: relative;
  overflow: hidden;
  cursor: pointer;
  background: var(--glass);
  backdrop-filter: blur(12px);
  border: 2px solid var(--border-common);
  border-radius: 1rem;
  opacity: 0;
  animation: fade-up var(--transition-slow) forwards;
  animation-delay: calc(var(--index, 0) * 0.1s);
  transition: transform var(--transition-normal);
}

.character-card:hover {
  transform: translateY(-10px) scale(1.02);
}

.character-card.rarity-rare { border-color: var(--border-rare); }
.character-card.rarity-epic { border-color: var(--border-epic); }
.character-card.rarity-legendary { border-color: var(--border-legendary); }

.character-card__glow {
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity var(--transition-normal);
  background: linear-gradient(135deg, #6b7280, #4b5563);
}

.rarity-rare .character-card__glow { background: linear-gradient(135deg, #3b82f6, #06b6d4); }
.rarity-epic .character-card__glow { background: linear-gradient(135deg, #a855f7, #ec4899); }
.rarity-legendary .character-card__glow { background: linear-gradient(135deg, #eab308, #f97316); }

.character-card:hover .character-card__glow {
  opacity: 0.2;
}

.rarity-badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 10;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 700;
}

.rarity-badge--large {
  top: 1rem;
  right: 1rem;
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
}

.character-card__body {
  position: relative;
  padding: 1.5rem 1.5rem 1rem;
}

.character-card__avatar {
  width: 8rem;
  height: 8rem;
  margin: 0 auto 1rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3.75rem;
  background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
  transition: transform var(--transition-normal);
}

.character-card__avatar:hover {
  transform: scale(1.1) rotate(5deg);
}

.character-card__name {
  text-align: center;
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.character-card__role {
  text-align: center;
  font-size: 0.875rem;
  color: var(--purple-300);
  margin-bottom: 0.75rem;
}

.mini-stats {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.5rem;
  margin-top: 1rem;
}

.mini-stat {
  background: var(--glass-faint);
  border-radius: 0.5rem;
  padding: 0.5rem;
  text-align: center;
}

.mini-stat__icon {
  display: block;
  font-size: 0.875rem;
  margin-bottom: 0.25rem;
}

.stat-attack { color: #f87171; }
.stat-defense { color: #60a5fa; }
.stat-speed { color: var(--yellow-400); }
.stat-hp { color: #f472b6; }

.mini-stat__value {
  font-size: 0.75rem;
  font-weight: 700;
}

.character-card__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  padding: 1.5rem;
  opacity: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
  transition: opacity var(--transition-normal);
}

.character-card__overlay p {
  font-size: 0.875rem;
  line-height: 1.6;
  color: var(--purple-200);
}

.character-card:hover .character-card__overlay {
  opacity: 1;
}

/* === Empty / Not Found === */
.empty-state {
  text-align: center;
  padding: 5rem 0;
  animation: fade-in var(--transition-slow);
}

.empty-state__title {
  font-size: 1.5rem;
  color: var(--purple-300);
}

.empty-state__hint {
  margin-top: 0.5rem;
  color: var(--purple-400);
}

.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

/* === Detail Page === */
.detail {
  max-width: 72rem;
  margin: 0 auto;
  padding: 6rem 1rem 3rem;
}

.btn-back {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: none;
  color: var(--purple-300);
  font-size: 1rem;
  margin-bottom: 2rem;
  animation: slide-in var(--transition-normal);
  transition: color var(--transition-fast);
}

.btn-back:hover {
  color: var(--text-primary);
}

.detail-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

@media (max-width: 768px) {
  .detail-grid {
    grid-template-columns: 1fr;
  }
}

.detail-portrait {
  position: relative;
  animation: scale-in var(--transition-slow);
}

.detail-portrait__glow {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  filter: blur(64px);
  border-radius: 1.5rem;
}

.detail-portrait__frame {
  position: relative;
  background: var(--glass);
  backdrop-filter: blur(12px);
  border: 1px solid var(--glass-border);
  border-radius: 1.5rem;
  padding: 2rem;
}

.detail-portrait__avatar {
  aspect-ratio: 1 / 1;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 8rem;
  border-radius: 1rem;
  background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
}

.detail-info {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  animation: fade-up var(--transition-slow) 0.2s both;
}

.detail-name {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.detail-role {
  font-size: 1.25rem;
  color: var(--purple-300);
}

.detail-description {
  font-size: 1.125rem;
  line-height: 1.7;
  color: var(--purple-200);
}

.panel {
  background: var(--glass);
  backdrop-filter: blur(12px);
  border: 1px solid var(--glass-border);
  border-radius: 1rem;
  padding: 1.5rem;
}

.panel__title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

/* === Stat Gauges === */
.stat-gauges {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.stat-gauge__header {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  margin-bottom: 0.5rem;
}

.stat-gauge__label {
  color: var(--purple-300);
}

.stat-gauge__value {
  font-weight: 700;
}

.stat-gauge__track {
  width: 100%;
  height: 0.5rem;
  border-radius: 9999px;
  background: #374151;
}

.stat-gauge__fill {
  height: 0.5rem;
  border-radius: 9999px;
  transition: width var(--transition-slow);
}

/* === Abilities === */
.ability-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.ability {
  background: var(--glass-faint);
  border-radius: 0.75rem;
  padding: 1rem;
  animation: slide-in var(--transition-normal) both;
  animation-delay: calc(0.3s + var(--index, 0) * 0.1s);
}

.ability__name {
  color: var(--purple-300);
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.ability__description {
  color: var(--purple-200);
  font-size: 0.875rem;
}

/* === Guide === */
.section-header {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.guide {
  margin-top: 3rem;
  padding: 2rem;
  animation: fade-up var(--transition-slow) 0.4s both;
}

.guide__body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  color: var(--purple-200);
  line-height: 1.7;
}

.guide__body strong {
  color: var(--text-primary);
}

.guide__tips {
  list-style: disc inside;
  margin-top: 0.5rem;
}

.guide__tips li + li {
  margin-top: 0.25rem;
}

/* === Fan Art === */
.fan-art-section {
  margin-top: 3rem;
  animation: fade-up var(--transition-slow) 0.5s both;
}

.fan-art-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
  gap: 1rem;
}

.fan-art-tile {
  aspect-ratio: 1 / 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  cursor: pointer;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
  transition: transform var(--transition-normal);
}

.fan-art-tile:hover {
  transform: scale(1.05) rotate(1deg);
}

.fan-art-tile__icon {
  font-size: 2rem;
  color: var(--purple-300);
  margin-bottom: 0.5rem;
}

.fan-art-tile__artist {
  font-size: 0.875rem;
  font-weight: 600;
}

.fan-art-tile__likes {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--purple-200);
}

.fan-art-tile__star {
  color: var(--yellow-400);
}

.fan-art-tile--upload {
  background: var(--glass);
  border: 2px dashed var(--purple-400);
  color: var(--purple-300);
  font-size: 0.875rem;
  font-weight: 600;
}

.fan-art-tile--upload:hover {
  transform: scale(1.05);
}
"#;
