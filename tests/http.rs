use chrono::Local;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotSummary {
    habit_count: usize,
    completion_count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeatmapCell {
    count: u32,
    level: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard {
    habit_count: usize,
    heatmap: Vec<HeatmapCell>,
    weekday_patterns: Vec<serde_json::Value>,
    milestones: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Streak {
    current: u32,
    best: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HabitInsight {
    habit_id: String,
    streak: Streak,
    completion_rate: u32,
    sparkline: Vec<bool>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("habit_pulse_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_pulse"))
        .env("PORT", port.to_string())
        .env("HABITS_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

fn days_ago(offsets: &[i64]) -> Vec<String> {
    let today = Local::now().date_naive();
    offsets
        .iter()
        .map(|offset| (today - chrono::Duration::days(*offset)).to_string())
        .collect()
}

fn sample_snapshot() -> serde_json::Value {
    let today = Local::now().date_naive();
    serde_json::json!({
        "habits": [
            {
                "id": "read",
                "name": "Read",
                "icon": "book",
                "frequency": "daily",
                "goal": 1,
                "startDate": (today - chrono::Duration::days(10)).to_string(),
                "completedDates": days_ago(&[0, 1, 2, 3, 4])
            },
            {
                "id": "run",
                "name": "Run",
                "frequency": "weekly",
                "goal": 3,
                "startDate": (today - chrono::Duration::days(14)).to_string(),
                "completedDates": days_ago(&[1, 3, 8])
            }
        ]
    })
}

async fn replace_snapshot(client: &Client, base_url: &str) -> SnapshotSummary {
    let response = client
        .put(format!("{base_url}/api/habits"))
        .json(&sample_snapshot())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_snapshot_feeds_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let summary = replace_snapshot(&client, &server.base_url).await;
    assert_eq!(summary.habit_count, 2);
    assert_eq!(summary.completion_count, 8);

    let dashboard: Dashboard = client
        .get(format!("{}/api/dashboard?weeks=2&limit=5", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(dashboard.habit_count, 2);
    assert_eq!(dashboard.heatmap.len(), 14);
    assert!(dashboard.heatmap.iter().all(|cell| cell.level <= 4));
    assert_eq!(dashboard.heatmap.iter().map(|cell| cell.count).sum::<u32>(), 8);
    assert_eq!(dashboard.weekday_patterns.len(), 7);
    assert_eq!(dashboard.milestones.len(), 2);
}

#[tokio::test]
async fn http_insight_reports_single_habit() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    replace_snapshot(&client, &server.base_url).await;

    let insight: HabitInsight = client
        .get(format!("{}/api/habits/read/insight", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(insight.habit_id, "read");
    assert_eq!(insight.streak.current, 5);
    assert_eq!(insight.streak.best, 5);
    assert_eq!(insight.completion_rate, 50);
    assert_eq!(insight.sparkline, vec![false, false, true, true, true, true, true]);

    let missing = client
        .get(format!("{}/api/habits/nope/insight", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_rejects_invalid_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/dashboard?weeks=0", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .put(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({
            "habits": [{ "id": "x", "goal": 0, "startDate": "2026-01-01" }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_posted_snapshot_is_not_stored() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    replace_snapshot(&client, &server.base_url).await;

    let mut body = sample_snapshot();
    body["habits"].as_array_mut().unwrap().truncate(1);
    body["weeks"] = serde_json::json!(1);

    let dashboard: Dashboard = client
        .post(format!("{}/api/dashboard", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard.habit_count, 1);
    assert_eq!(dashboard.heatmap.len(), 7);

    let stored: serde_json::Value = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored["habits"].as_array().unwrap().len(), 2);
}
