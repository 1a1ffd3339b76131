//! The whole stylesheet, inlined into every page head. Utility class names
//! follow the familiar Tailwind vocabulary so `ui::cn` can merge them.

pub const APP_CSS: &str = r"
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{font-family:ui-sans-serif,system-ui,-apple-system,'Segoe UI',sans-serif;line-height:1.5}
a{color:inherit;text-decoration:none}
a:hover{text-decoration:underline}
ul{list-style:none}
input,select,button{font:inherit}
table{width:100%;border-collapse:collapse;font-size:.875rem}
th{text-align:left;font-weight:600;color:#64748b;border-bottom:1px solid #e2e8f0;padding:.5rem .75rem}
td{border-bottom:1px solid #f1f5f9;padding:.5rem .75rem;vertical-align:top}

.container{max-width:72rem;margin:0 auto;padding-left:1.5rem;padding-right:1.5rem}
.site-header{background:#fff;border-bottom:1px solid #e2e8f0}
.site-footer{border-top:1px solid #e2e8f0;margin-top:4rem;padding:2rem 0;color:#64748b;font-size:.875rem}
main{padding-top:2rem}
.hero{padding:4rem 0;text-align:center}

.tabs{display:flex;gap:.25rem;border-bottom:1px solid #e2e8f0;margin-bottom:1.5rem}
.tab{padding:.5rem 1rem;color:#64748b;border-bottom:2px solid transparent}
.tab-active{color:#4338ca;border-bottom-color:#4f46e5;font-weight:600}

.progress{height:.75rem;background:#e2e8f0;border-radius:9999px;overflow:hidden}
.progress-fill{height:100%;background:#4f46e5;transition:width .3s}
.step{padding:.25rem 0;color:#64748b}
.step-done{color:#047857}
.step-active{color:#0f172a;font-weight:600}

.modal{display:none;position:fixed;inset:0;background:rgba(15,23,42,.5);align-items:center;justify-content:center;z-index:10}
.modal:target{display:flex}
.modal-panel{background:#fff;border-radius:.75rem;padding:1.5rem;max-width:32rem;width:100%}

.filter{display:flex;flex-direction:column;gap:.25rem}
.filter input,.filter select{border:1px solid #cbd5e1;border-radius:.5rem;padding:.25rem .5rem;background:#fff}
.link{background:none;border:0;cursor:pointer;color:inherit;padding:0}
.link:hover{text-decoration:underline}
.stars{color:#f59e0b;letter-spacing:.05em}

.block{display:block}.inline{display:inline}.inline-block{display:inline-block}
.flex{display:flex}.inline-flex{display:inline-flex}.grid{display:grid}.hidden{display:none}
.grid-cols-2{grid-template-columns:repeat(2,minmax(0,1fr))}
.grid-cols-3{grid-template-columns:repeat(3,minmax(0,1fr))}
.items-center{align-items:center}.items-end{align-items:flex-end}
.justify-between{justify-content:space-between}.justify-center{justify-content:center}
.gap-2{gap:.5rem}.gap-4{gap:1rem}.gap-6{gap:1.5rem}
.w-full{width:100%}.max-w-md{max-width:28rem}.max-w-xl{max-width:36rem}
.mx-auto{margin-left:auto;margin-right:auto}

.p-4{padding:1rem}.p-6{padding:1.5rem}
.px-2{padding-left:.5rem;padding-right:.5rem}.px-3{padding-left:.75rem;padding-right:.75rem}
.px-4{padding-left:1rem;padding-right:1rem}.px-8{padding-left:2rem;padding-right:2rem}
.py-1{padding-top:.25rem;padding-bottom:.25rem}.py-2{padding-top:.5rem;padding-bottom:.5rem}
.py-4{padding-top:1rem;padding-bottom:1rem}.py-8{padding-top:2rem;padding-bottom:2rem}
.py-16{padding-top:4rem;padding-bottom:4rem}
.mb-1{margin-bottom:.25rem}.mb-2{margin-bottom:.5rem}.mb-4{margin-bottom:1rem}
.mb-6{margin-bottom:1.5rem}.mb-8{margin-bottom:2rem}
.mt-1{margin-top:.25rem}.mt-2{margin-top:.5rem}.mt-4{margin-top:1rem}.mt-8{margin-top:2rem}

.rounded{border-radius:.25rem}.rounded-lg{border-radius:.5rem}.rounded-xl{border-radius:.75rem}
.rounded-full{border-radius:9999px}
.shadow{box-shadow:0 1px 3px rgba(15,23,42,.1),0 1px 2px rgba(15,23,42,.06)}
.border{border-width:1px;border-style:solid}.border-2{border-width:2px;border-style:solid}
.border-l-4{border-left-width:4px;border-left-style:solid}
.border-slate-300{border-color:#cbd5e1}.border-rose-600{border-color:#e11d48}
.border-emerald-500{border-color:#10b981}.border-sky-500{border-color:#0ea5e9}
.border-amber-500{border-color:#f59e0b}

.bg-white{background-color:#fff}.bg-transparent{background-color:transparent}
.bg-slate-50{background-color:#f8fafc}.bg-slate-100{background-color:#f1f5f9}
.bg-slate-900{background-color:#0f172a}
.bg-indigo-600{background-color:#4f46e5}.bg-rose-600{background-color:#e11d48}
.bg-rose-100{background-color:#ffe4e6}.bg-emerald-100{background-color:#d1fae5}
.bg-sky-100{background-color:#e0f2fe}.bg-amber-100{background-color:#fef3c7}
.hover\:bg-indigo-700:hover{background-color:#4338ca}
.hover\:bg-indigo-50:hover{background-color:#eef2ff}
.hover\:bg-slate-100:hover{background-color:#f1f5f9}

.text-xs{font-size:.75rem}.text-sm{font-size:.875rem}.text-lg{font-size:1.125rem}
.text-xl{font-size:1.25rem}.text-2xl{font-size:1.5rem}.text-3xl{font-size:1.875rem}
.text-4xl{font-size:2.25rem}.text-5xl{font-size:3rem}
.text-center{text-align:center}
.font-medium{font-weight:500}.font-semibold{font-weight:600}.font-bold{font-weight:700}
.text-white{color:#fff}.text-slate-500{color:#64748b}.text-slate-700{color:#334155}
.text-slate-800{color:#1e293b}.text-slate-900{color:#0f172a}
.text-indigo-700{color:#4338ca}.text-rose-700{color:#be123c}.text-rose-800{color:#9f1239}
.text-emerald-700{color:#047857}.text-emerald-800{color:#065f46}
.text-sky-800{color:#075985}.text-amber-800{color:#92400e}

@media (max-width:768px){
  .grid-cols-2,.grid-cols-3{grid-template-columns:minmax(0,1fr)}
}
";

#[cfg(test)]
mod tests {
    use super::APP_CSS;

    #[test]
    fn every_tone_class_has_a_rule() {
        use bizlens_core::Tone;
        let tones = [
            Tone::Positive,
            Tone::Neutral,
            Tone::Info,
            Tone::Caution,
            Tone::Critical,
        ];
        for tone in tones {
            for class in tone
                .badge_class()
                .split_whitespace()
                .chain(tone.accent_class().split_whitespace())
            {
                assert!(APP_CSS.contains(&format!(".{class}{{")), "missing rule for {class}");
            }
        }
    }
}
