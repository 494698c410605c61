use crate::{
    app::util::html::escape,
    images::{
        dtos::generate_image_dto::GenerateImageDto,
        enums::{aspect_ratio::AspectRatio, output_format::OutputFormat},
    },
    sessions::models::notice::Notice,
};

use super::notice::notices_template;

pub fn input_panel_template(draft: &GenerateImageDto, notices: &[Notice]) -> String {
    let aspect_ratios: String = AspectRatio::all()
        .iter()
        .map(|ratio| {
            option_template(ratio.value(), &ratio.label(), *ratio == draft.aspect_ratio)
        })
        .collect();

    let output_formats: String = OutputFormat::all()
        .iter()
        .map(|format| option_template(format.value(), format.value(), *format == draft.output_format))
        .collect();

    format!(
        "
        <section>
            <h2>Input</h2>
            <form method=\"post\" action=\"/images/generate\"
                onsubmit=\"this.querySelector('button').disabled = true; this.querySelector('.spinner').hidden = false;\">
                <label for=\"prompt\">Enter your prompt:</label>
                <textarea id=\"prompt\" name=\"prompt\" rows=\"4\"
                    title=\"Describe the image you want to generate\">{}</textarea>

                <label for=\"aspect_ratio\">Select aspect ratio:</label>
                <select id=\"aspect_ratio\" name=\"aspect_ratio\"
                    title=\"Choose the aspect ratio for your generated image\">{}</select>

                <details>
                    <summary>Advanced Options</summary>
                    <label for=\"output_format\">Select output format:</label>
                    <select id=\"output_format\" name=\"output_format\"
                        title=\"Choose the file format for your generated image\">{}</select>

                    <label for=\"output_quality\">Select output quality:</label>
                    <input id=\"output_quality\" name=\"output_quality\" type=\"range\" min=\"1\" max=\"100\" value=\"{}\"
                        title=\"Set the quality of the output image (higher values mean better quality but larger file size)\"
                        oninput=\"this.nextElementSibling.value = this.value\">
                    <output>{}</output>
                </details>

                <button type=\"submit\">Generate Image</button>
                <span class=\"spinner\" hidden>Generating image...</span>
            </form>
            {}
        </section>
        ",
        escape(&draft.prompt),
        aspect_ratios,
        output_formats,
        draft.output_quality,
        draft.output_quality,
        notices_template(notices)
    )
}

fn option_template(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}
