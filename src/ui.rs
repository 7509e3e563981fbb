pub fn render_index(date: &str, habit_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{HABITS}}", &habit_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Pulse</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ec;
      --bg-2: #c9e4c5;
      --ink: #23302a;
      --accent: #3a8f5c;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
      --level-0: #ebedf0;
      --level-1: #c6e48b;
      --level-2: #7bc96f;
      --level-3: #239a3b;
      --level-4: #196127;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4f9f2 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f6a63;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .heatmap {
      display: grid;
      grid-auto-flow: column;
      grid-template-rows: repeat(7, 14px);
      gap: 3px;
      overflow-x: auto;
    }

    .cell {
      width: 14px;
      height: 14px;
      border-radius: 3px;
    }

    .bars {
      display: grid;
      gap: 8px;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 48px 1fr 48px;
      align-items: center;
      gap: 10px;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: var(--accent);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    td, th {
      text-align: left;
      padding: 6px 4px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .status-ahead { color: var(--accent); }
    .status-on-track { color: var(--accent-2); }
    .status-behind { color: #c4452f; }

    .spark {
      display: inline-flex;
      gap: 2px;
    }

    .spark i {
      width: 8px;
      height: 8px;
      border-radius: 50%;
      background: var(--level-0);
    }

    .spark i.on {
      background: var(--accent);
    }

    .status {
      min-height: 1.2em;
      color: #8b857d;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Pulse</h1>
      <p class="subtitle">{{DATE}} &middot; {{HABITS}} habits tracked</p>
    </header>

    <section class="card">
      <h2>Activity</h2>
      <div class="heatmap" id="heatmap"></div>
    </section>

    <section class="card">
      <h2>Best days</h2>
      <div class="bars" id="weekdays"></div>
    </section>

    <section class="card">
      <h2>Upcoming milestones</h2>
      <table id="milestones"></table>
    </section>

    <section class="card">
      <h2>Habits</h2>
      <table id="habits"></table>
    </section>

    <p class="status" id="status"></p>
  </main>

  <script>
    const el = (id) => document.getElementById(id);
    const escape = (text) => String(text ?? '').replace(/[&<>"']/g, (c) => `&#${c.charCodeAt(0)};`);

    const renderHeatmap = (cells) => {
      el('heatmap').innerHTML = cells
        .map((cell) => `<div class="cell" title="${cell.date}: ${cell.count}" style="background: var(--level-${cell.level})"></div>`)
        .join('');
    };

    const renderWeekdays = (patterns) => {
      el('weekdays').innerHTML = patterns
        .map((p) => `<div class="bar-row"><span>${p.day}</span><div class="bar" style="width: ${p.percentage}%"></div><span>${p.completions}</span></div>`)
        .join('');
    };

    const renderMilestones = (milestones) => {
      if (!milestones.length) {
        el('milestones').innerHTML = '<tr><td>No active streaks yet</td></tr>';
        return;
      }
      el('milestones').innerHTML = milestones
        .map((m) => `<tr><td>${escape(m.habitIcon)} ${escape(m.habitName)}</td><td>${m.currentStreak} / ${m.nextMilestone} days</td><td>${m.daysRemaining} to go</td><td>${m.progress}%</td></tr>`)
        .join('');
    };

    const renderHabits = (insights, targets) => {
      const statusById = Object.fromEntries(targets.map((t) => [t.habitId, t]));
      el('habits').innerHTML = '<tr><th>Habit</th><th>Streak</th><th>Rate</th><th>Strength</th><th>Last 7 days</th><th>Status</th></tr>' +
        insights
          .map((h) => {
            const target = statusById[h.habitId];
            const spark = h.sparkline.map((done) => `<i class="${done ? 'on' : ''}"></i>`).join('');
            return `<tr><td>${escape(h.habitName || h.habitId)}</td><td>${h.streak.current} (best ${h.streak.best})</td><td>${h.completionRate}%</td><td>${h.strength.overall}</td><td><span class="spark">${spark}</span></td><td class="status-${target.status}">${target.status}</td></tr>`;
          })
          .join('');
    };

    const load = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load dashboard');
      }
      const dashboard = await res.json();
      renderHeatmap(dashboard.heatmap);
      renderWeekdays(dashboard.weekdayPatterns);
      renderMilestones(dashboard.milestones);
      renderHabits(dashboard.habits, dashboard.targetVsActual);
    };

    load().catch((err) => {
      el('status').textContent = err.message;
    });
  </script>
</body>
</html>
"#;
