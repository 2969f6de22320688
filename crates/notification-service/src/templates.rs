pub struct EmailTemplate;

impl EmailTemplate {
    /// Wrap a plain-text report in a minimal HTML shell. The report stays
    /// monospaced so the aligned columns survive email clients.
    pub fn render(title: &str, report: &str) -> String {
        let escaped = report.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");

        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1"></head>
<body style="margin:0;padding:0;background:#f1f5f9;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;">
<table width="100%" cellpadding="0" cellspacing="0" style="background:#f1f5f9;padding:32px 0;">
  <tr><td align="center">
    <table width="720" cellpadding="0" cellspacing="0" style="background:#ffffff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,0.1);">
      <tr><td style="background:#1e293b;color:#fff;padding:12px 20px;font-size:18px;font-weight:700;">{title}</td></tr>
      <tr><td style="padding:16px 20px;">
        <pre style="margin:0;font-family:'SF Mono',Menlo,Consolas,monospace;font-size:12px;line-height:1.5;color:#334155;white-space:pre;overflow-x:auto;">{escaped}</pre>
      </td></tr>
      <tr><td style="padding:16px 20px;border-top:1px solid #e2e8f0;">
        <p style="margin:0;color:#94a3b8;font-size:12px;">Sent at {ts} UTC</p>
      </td></tr>
    </table>
  </td></tr>
</table>
</body>
</html>"#,
            ts = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
